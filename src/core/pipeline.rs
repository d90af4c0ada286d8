use std::{
    fmt,
    io::Read,
    path::{Path, PathBuf},
};

use rayon::prelude::*;

use super::{
    error::{Error, Result},
    keys::KeyCollection,
    language::LanguageSpec,
    merge::{MergeStats, merge_with_stats},
    options::Options,
    pattern::extract_keys,
    serialize::serialize,
};

/// Contents of an input file.
pub enum FileContents {
    /// No content (e.g. a directory entry). Passed through untouched.
    Null,
    /// Fully buffered content.
    Buffer(Vec<u8>),
    /// A live stream. Not supported; pushing one fails the run.
    Stream(Box<dyn Read + Send>),
}

impl fmt::Debug for FileContents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileContents::Null => f.write_str("Null"),
            FileContents::Buffer(bytes) => write!(f, "Buffer({} bytes)", bytes.len()),
            FileContents::Stream(_) => f.write_str("Stream"),
        }
    }
}

/// An input file handed to the pipeline.
#[derive(Debug)]
pub struct SourceFile {
    pub path: PathBuf,
    /// Directory the file was found under. Outputs are placed relative to it.
    pub base: PathBuf,
    pub contents: FileContents,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>, base: impl Into<PathBuf>, contents: FileContents) -> Self {
        Self {
            path: path.into(),
            base: base.into(),
            contents,
        }
    }

    pub fn buffered(
        path: impl Into<PathBuf>,
        base: impl Into<PathBuf>,
        contents: impl Into<Vec<u8>>,
    ) -> Self {
        Self::new(path, base, FileContents::Buffer(contents.into()))
    }
}

/// One generated translation file.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputFile {
    pub language: String,
    pub path: PathBuf,
    pub base: PathBuf,
    pub contents: String,
    pub stats: MergeStats,
}

impl OutputFile {
    /// Path relative to `base`.
    pub fn relative(&self) -> &Path {
        self.path.strip_prefix(&self.base).unwrap_or(&self.path)
    }
}

/// Metadata of the last buffered file, reused to place outputs.
#[derive(Debug, Clone)]
struct FileTemplate {
    base: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Collecting,
    Finalizing,
    Done,
    Error,
}

impl PipelineState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineState::Collecting => "collecting",
            PipelineState::Finalizing => "finalizing",
            PipelineState::Done => "done",
            PipelineState::Error => "error",
        }
    }
}

/// Progress notifications, used for verbose output.
#[derive(Debug)]
pub enum PipelineEvent<'a> {
    FileSkipped {
        path: &'a Path,
    },
    FileScanned {
        path: &'a Path,
        keys: usize,
    },
    LanguageMerged {
        code: &'a str,
        path: &'a Path,
        stats: MergeStats,
    },
}

type Observer = Box<dyn Fn(&PipelineEvent<'_>) + Send + Sync>;

/// Collects keys from input files, then writes one translation tree per language.
///
/// Files are processed in the order they are pushed. [`finish`] merges the
/// collected keys into every language's existing translations and returns
/// the outputs, or the first error. After an error the pipeline refuses
/// further work.
///
/// [`finish`]: TranslationPipeline::finish
pub struct TranslationPipeline {
    options: Options,
    state: PipelineState,
    keys: KeyCollection,
    template: Option<FileTemplate>,
    observer: Option<Observer>,
}

impl TranslationPipeline {
    /// Validate `options` and start collecting.
    pub fn new(options: Options) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            options,
            state: PipelineState::Collecting,
            keys: KeyCollection::new(),
            template: None,
            observer: None,
        })
    }

    pub fn on_event<F>(mut self, observer: F) -> Self
    where
        F: Fn(&PipelineEvent<'_>) + Send + Sync + 'static,
    {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    pub fn keys(&self) -> &KeyCollection {
        &self.keys
    }

    /// Extract the keys of one file.
    pub fn push(&mut self, file: SourceFile) -> Result<()> {
        self.expect_collecting()?;

        match file.contents {
            FileContents::Null => {
                self.emit(&PipelineEvent::FileSkipped { path: &file.path });
            }
            FileContents::Stream(_) => {
                self.state = PipelineState::Error;
                return Err(Error::UnsupportedInput { path: file.path });
            }
            FileContents::Buffer(bytes) => {
                let text = String::from_utf8_lossy(&bytes);
                let keys = extract_keys(&text, &self.options.patterns);
                self.emit(&PipelineEvent::FileScanned {
                    path: &file.path,
                    keys: keys.len(),
                });
                self.keys.extend(keys);
                self.template = Some(FileTemplate { base: file.base });
            }
        }

        Ok(())
    }

    /// Merge the collected keys into every language and return the outputs.
    ///
    /// Returns nothing if no buffered file was pushed. Outputs come back in
    /// language order; if any language fails, no output is returned.
    pub fn finish(&mut self) -> Result<Vec<OutputFile>> {
        self.expect_collecting()?;
        self.state = PipelineState::Finalizing;

        let Some(template) = self.template.clone() else {
            self.state = PipelineState::Done;
            return Ok(Vec::new());
        };

        let result: Result<Vec<OutputFile>> = self
            .options
            .languages
            .par_iter()
            .map(|language| self.merge_language(language, &template))
            .collect();

        self.state = match result {
            Ok(_) => PipelineState::Done,
            Err(_) => PipelineState::Error,
        };
        result
    }

    /// Push every file, then finish.
    pub fn run(&mut self, files: impl IntoIterator<Item = SourceFile>) -> Result<Vec<OutputFile>> {
        for file in files {
            self.push(file)?;
        }
        self.finish()
    }

    fn merge_language(&self, language: &LanguageSpec, template: &FileTemplate) -> Result<OutputFile> {
        let existing = language.src.load()?;
        let (tree, stats) = merge_with_stats(
            existing,
            self.keys.iter(),
            &self.options.default_translation,
        );
        let path = template.base.join(language.destination());

        self.emit(&PipelineEvent::LanguageMerged {
            code: &language.code,
            path: &path,
            stats,
        });

        Ok(OutputFile {
            language: language.code.clone(),
            contents: serialize(&tree),
            path,
            base: template.base.clone(),
            stats,
        })
    }

    fn expect_collecting(&self) -> Result<()> {
        if self.state == PipelineState::Collecting {
            Ok(())
        } else {
            Err(Error::InvalidState {
                state: self.state.as_str(),
            })
        }
    }

    fn emit(&self, event: &PipelineEvent<'_>) {
        if let Some(observer) = &self.observer {
            observer(event);
        }
    }
}
