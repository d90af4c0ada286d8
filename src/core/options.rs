use std::collections::HashSet;

use super::{
    error::{Error, Result},
    language::LanguageSpec,
    merge::DefaultTranslation,
    pattern::KeyPattern,
};

/// Settings for a [`TranslationPipeline`](crate::core::TranslationPipeline).
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub languages: Vec<LanguageSpec>,
    pub patterns: Vec<KeyPattern>,
    pub default_translation: DefaultTranslation,
}

impl Options {
    pub fn new(languages: Vec<LanguageSpec>, patterns: Vec<KeyPattern>) -> Self {
        Self {
            languages,
            patterns,
            default_translation: DefaultTranslation::default(),
        }
    }

    pub fn with_default(mut self, default_translation: DefaultTranslation) -> Self {
        self.default_translation = default_translation;
        self
    }

    /// Check the options before any file is processed.
    ///
    /// Patterns are validated when they are compiled, so this only checks
    /// that there are some, plus the language list.
    pub fn validate(&self) -> Result<()> {
        if self.languages.is_empty() {
            return Err(Error::config("at least one language is required"));
        }
        if self.patterns.is_empty() {
            return Err(Error::config("at least one pattern is required"));
        }

        let mut destinations = HashSet::new();
        for language in &self.languages {
            if language.code.trim().is_empty() {
                return Err(Error::config("language code must not be empty"));
            }
            let dest = language.destination();
            if !destinations.insert(dest.clone()) {
                return Err(Error::config(format!(
                    "language '{}' writes to '{}', which another language already uses",
                    language.code,
                    dest.display()
                )));
            }
        }

        Ok(())
    }
}
