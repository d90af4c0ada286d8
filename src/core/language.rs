use std::{
    fs,
    path::{Path, PathBuf},
};

use serde_json::Value;

use super::{
    error::{Error, Result},
    tree::TranslationTree,
};

/// Where the existing translations of a language come from.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum TranslationSource {
    /// Start from an empty tree.
    #[default]
    None,
    /// Read and parse a JSON file when the run finishes.
    File(PathBuf),
    /// Use an in-memory tree as-is.
    Inline(TranslationTree),
}

impl TranslationSource {
    /// Produce the starting tree for a merge.
    ///
    /// A missing or malformed file is an error, never an empty tree.
    pub fn load(&self) -> Result<TranslationTree> {
        match self {
            TranslationSource::None => Ok(TranslationTree::new()),
            TranslationSource::File(path) => load_translation_file(path),
            TranslationSource::Inline(tree) => Ok(tree.clone()),
        }
    }
}

/// A target language and where its output goes.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageSpec {
    pub code: String,
    pub dest: Option<PathBuf>,
    pub src: TranslationSource,
}

impl LanguageSpec {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            dest: None,
            src: TranslationSource::None,
        }
    }

    pub fn with_dest(mut self, dest: impl Into<PathBuf>) -> Self {
        self.dest = Some(dest.into());
        self
    }

    pub fn with_src(mut self, src: TranslationSource) -> Self {
        self.src = src;
        self
    }

    /// Output file name relative to the template base, `<code>.json` by default.
    pub fn destination(&self) -> PathBuf {
        self.dest
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("{}.json", self.code)))
    }
}

fn load_translation_file(path: &Path) -> Result<TranslationTree> {
    let source_error = |message: String| Error::SourceLoad {
        path: path.to_path_buf(),
        message,
    };

    let content = fs::read_to_string(path).map_err(|e| source_error(e.to_string()))?;
    let value: Value =
        serde_json::from_str(&content).map_err(|e| source_error(format!("invalid JSON: {}", e)))?;

    TranslationTree::from_value(value)
        .ok_or_else(|| source_error("root of JSON file must be an object".to_string()))
}
