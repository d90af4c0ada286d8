use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{
    self, DEFAULT_CAPTURE_GROUP, DefaultTranslation, KeyPattern, LanguageSpec, Options,
    TranslationSource, TranslationTree,
};

pub const CONFIG_FILE_NAME: &str = ".transpreprc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub languages: Vec<LanguageEntry>,
    #[serde(default)]
    pub patterns: PatternList,
    #[serde(default)]
    pub default_translation: DefaultTranslationConfig,
    #[serde(default = "default_source_root")]
    pub source_root: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<String>,
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

/// A language given as a bare code or as a full record.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum LanguageEntry {
    Code(String),
    Spec {
        code: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        dest: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        src: Option<Value>,
    },
}

/// One pattern or a list of them.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum PatternList {
    One(PatternEntry),
    Many(Vec<PatternEntry>),
}

impl Default for PatternList {
    fn default() -> Self {
        PatternList::Many(Vec::new())
    }
}

impl PatternList {
    pub fn entries(&self) -> &[PatternEntry] {
        match self {
            PatternList::One(entry) => std::slice::from_ref(entry),
            PatternList::Many(entries) => entries,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum PatternEntry {
    Regex(String),
    Detailed {
        regex: String,
        #[serde(default = "default_group")]
        group: usize,
    },
}

/// How a key-derived default is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum KeyTransform {
    /// The key itself, e.g. `home.title`.
    Key,
    Uppercase,
    Lowercase,
    /// The part after the last dot, e.g. `title`.
    LastSegment,
}

impl KeyTransform {
    pub fn apply(self, key: &str) -> Value {
        let text = match self {
            KeyTransform::Key => key.to_string(),
            KeyTransform::Uppercase => key.to_uppercase(),
            KeyTransform::Lowercase => key.to_lowercase(),
            KeyTransform::LastSegment => key.rsplit('.').next().unwrap_or(key).to_string(),
        };
        Value::String(text)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum DefaultTranslationConfig {
    #[serde(rename_all = "camelCase")]
    FromKey { from_key: KeyTransform },
    Value(Value),
}

impl Default for DefaultTranslationConfig {
    fn default() -> Self {
        DefaultTranslationConfig::Value(Value::Null)
    }
}

fn default_group() -> usize {
    DEFAULT_CAPTURE_GROUP
}

fn default_source_root() -> String {
    "./".to_string()
}

fn default_ignores() -> Vec<String> {
    ["**/node_modules/**", "**/target/**", "**/.git/**"]
        .map(String::from)
        .to_vec()
}

fn default_extensions() -> Vec<String> {
    ["html", "js", "jsx", "ts", "tsx", "vue"]
        .map(String::from)
        .to_vec()
}

impl Config {
    /// A ready-to-edit config written by `init`.
    pub fn starter() -> Self {
        Self {
            languages: vec![LanguageEntry::Code("en".to_string())],
            patterns: PatternList::Many(vec![
                PatternEntry::Regex(r"_t\('([^']+)'\)".to_string()),
                PatternEntry::Regex(r#"data-translate="([^"]+)""#.to_string()),
            ]),
            default_translation: DefaultTranslationConfig::default(),
            source_root: default_source_root(),
            out_dir: None,
            includes: Vec::new(),
            ignores: default_ignores(),
            extensions: default_extensions(),
        }
    }

    /// Validate configuration values.
    ///
    /// Returns an error if required options are missing or any glob pattern is invalid.
    pub fn validate(&self) -> Result<()> {
        if self.languages.is_empty() {
            bail!("'languages' is required and must not be empty");
        }
        if self.patterns.entries().is_empty() {
            bail!("'patterns' is required and must not be empty");
        }

        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        // Patterns without wildcards are literal directory paths.
        for pattern in &self.includes {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'includes': \"{}\"", pattern)
                })?;
            }
        }

        Ok(())
    }

    /// Build pipeline options. Relative `src` paths resolve against `base_dir`.
    pub fn to_options(&self, base_dir: &Path) -> core::Result<Options> {
        let patterns = self
            .patterns
            .entries()
            .iter()
            .map(|entry| match entry {
                PatternEntry::Regex(regex) => KeyPattern::new(regex),
                PatternEntry::Detailed { regex, group } => KeyPattern::with_group(regex, *group),
            })
            .collect::<core::Result<Vec<_>>>()?;

        let languages = self
            .languages
            .iter()
            .map(|entry| language_spec(entry, base_dir))
            .collect::<core::Result<Vec<_>>>()?;

        let default_translation = match &self.default_translation {
            DefaultTranslationConfig::FromKey { from_key } => {
                let transform = *from_key;
                DefaultTranslation::from_fn(move |key| transform.apply(key))
            }
            DefaultTranslationConfig::Value(value) if is_scalar(value) => {
                DefaultTranslation::Value(value.clone())
            }
            DefaultTranslationConfig::Value(value) => {
                return Err(core::Error::Configuration(format!(
                    "'defaultTranslation' must be a scalar or {{\"fromKey\": ...}}, got {}",
                    value
                )));
            }
        };

        let options = Options::new(languages, patterns).with_default(default_translation);
        options.validate()?;
        Ok(options)
    }
}

fn is_scalar(value: &Value) -> bool {
    !matches!(value, Value::Object(_) | Value::Array(_))
}

fn language_spec(entry: &LanguageEntry, base_dir: &Path) -> core::Result<LanguageSpec> {
    match entry {
        LanguageEntry::Code(code) => Ok(LanguageSpec::new(code.clone())),
        LanguageEntry::Spec { code, dest, src } => {
            let src = match src {
                None | Some(Value::Null) => TranslationSource::None,
                Some(Value::String(path)) => TranslationSource::File(base_dir.join(path)),
                Some(Value::Object(map)) => {
                    TranslationSource::Inline(TranslationTree::from(map.clone()))
                }
                Some(other) => {
                    return Err(core::Error::Configuration(format!(
                        "unsupported src for language '{}': {}",
                        code, other
                    )));
                }
            };
            let mut spec = LanguageSpec::new(code.clone()).with_src(src);
            if let Some(dest) = dest {
                spec = spec.with_dest(dest);
            }
            Ok(spec)
        }
    }
}

pub fn starter_config_json() -> Result<String> {
    serde_json::to_string_pretty(&Config::starter()).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// The file the config came from.
    pub path: PathBuf,
}

impl ConfigLoadResult {
    /// Directory relative paths in the config resolve against.
    pub fn base_dir(&self) -> PathBuf {
        self.path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default()
    }
}

pub fn load_config_file(path: &Path) -> Result<ConfigLoadResult> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("Invalid config file: {}", path.display()))?;
    Ok(ConfigLoadResult {
        config,
        path: path.to_path_buf(),
    })
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => load_config_file(&path),
        None => bail!(
            "No {} found in '{}' or its parents.\n\
             Hint: Run `transprep init` to create one.",
            CONFIG_FILE_NAME,
            start_dir.display()
        ),
    }
}
