//! Key extraction and translation merge engine.
//!
//! Data flows leaf-first through these modules:
//!
//! - `pattern`: regex key extraction from file text
//! - `keys`: ordered aggregation of extracted keys across files
//! - `tree`: dotted-path access to nested translation documents
//! - `merge`: default-filling of untranslated keys
//! - `serialize`: key-sorted JSON rendering
//! - `language`: language specs and existing translation sources
//! - `pipeline`: file intake and per-language output generation

mod error;
mod keys;
mod language;
mod merge;
mod options;
mod pattern;
mod pipeline;
mod serialize;
mod tree;

pub use error::{Error, Result};
pub use keys::KeyCollection;
pub use language::{LanguageSpec, TranslationSource};
pub use merge::{DefaultTranslation, MergeStats, is_translated, merge, merge_with_stats};
pub use options::Options;
pub use pattern::{DEFAULT_CAPTURE_GROUP, KeyPattern, extract_keys};
pub use pipeline::{
    FileContents, OutputFile, PipelineEvent, PipelineState, SourceFile, TranslationPipeline,
};
pub use serialize::serialize;
pub use tree::TranslationTree;
