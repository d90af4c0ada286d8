//! Transprep - translation key extraction for build pipelines
//!
//! Transprep scans source files for translation keys using user-supplied
//! regular expressions, then writes one JSON translation file per language.
//! New keys are merged into existing translations without touching values
//! that are already translated, and output is key-sorted so rebuilds diff
//! cleanly.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands, reporting, exit status)
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction and merge engine, usable as a library
//! - `scanner`: Source tree walking with include/ignore globs
//!
//! ## Example
//!
//! ```
//! use transprep::core::{KeyPattern, LanguageSpec, Options, SourceFile, TranslationPipeline};
//!
//! let options = Options::new(
//!     vec![LanguageSpec::new("en")],
//!     vec![KeyPattern::new(r"_t\('([^']+)'\)").unwrap()],
//! );
//! let mut pipeline = TranslationPipeline::new(options).unwrap();
//! let outputs = pipeline
//!     .run(vec![SourceFile::buffered("/app/index.js", "/app", "_t('home.title')")])
//!     .unwrap();
//!
//! assert_eq!(outputs[0].contents, "{\n  \"home\": {\n    \"title\": null\n  }\n}");
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod scanner;
