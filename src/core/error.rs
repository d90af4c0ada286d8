//! Error types for the extraction pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using the pipeline [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while configuring or running a [`TranslationPipeline`].
///
/// [`TranslationPipeline`]: crate::core::TranslationPipeline
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or invalid option, detected before any file is processed.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// A file was handed over as a live stream instead of buffered content.
    #[error("unsupported input representation for '{path}': streams are not supported")]
    UnsupportedInput { path: PathBuf },

    /// Existing translations for a language could not be loaded.
    #[error("failed to load translations from '{path}': {message}")]
    SourceLoad { path: PathBuf, message: String },

    /// The pipeline was used after it completed or failed.
    #[error("pipeline can no longer accept work (state: {state})")]
    InvalidState { state: &'static str },
}

impl Error {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        Error::Configuration(message.into())
    }
}
