use std::fmt;

use regex::Regex;

use super::error::{Error, Result};

/// Capture group extracted when a pattern does not name one.
pub const DEFAULT_CAPTURE_GROUP: usize = 1;

/// A regular expression whose capture group yields translation keys.
///
/// Examples:
/// - `_t\('(.+?)'\)` extracts `home.title` from `_t('home.title')`
/// - `data-translate="([^"]+)"` extracts the attribute value
#[derive(Clone)]
pub struct KeyPattern {
    regex: Regex,
    group: usize,
}

impl KeyPattern {
    /// Compile a pattern extracting the first capture group.
    pub fn new(pattern: &str) -> Result<Self> {
        Self::with_group(pattern, DEFAULT_CAPTURE_GROUP)
    }

    /// Compile a pattern extracting the given capture group.
    ///
    /// Fails if the regex is malformed or has no group at `group`.
    pub fn with_group(pattern: &str, group: usize) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| Error::config(format!("invalid pattern \"{}\": {}", pattern, e)))?;
        Self::from_regex(regex, group)
    }

    /// Wrap an already compiled regex.
    pub fn from_regex(regex: Regex, group: usize) -> Result<Self> {
        // captures_len counts the implicit whole-match group 0
        if group >= regex.captures_len() {
            return Err(Error::config(format!(
                "pattern \"{}\" has no capture group {}",
                regex.as_str(),
                group
            )));
        }
        Ok(Self { regex, group })
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn group(&self) -> usize {
        self.group
    }

    /// Collect the capture group value of every match in `text`, in match order.
    ///
    /// Every call starts a new search from the beginning of `text`, so a
    /// pattern can be reused across files. Matches that leave the group
    /// unset (e.g. the other side of an alternation) are skipped.
    pub fn captures(&self, text: &str) -> Vec<String> {
        self.regex
            .captures_iter(text)
            .filter_map(|caps| caps.get(self.group))
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

impl fmt::Debug for KeyPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPattern")
            .field("regex", &self.regex.as_str())
            .field("group", &self.group)
            .finish()
    }
}

/// Run every pattern over `text` and concatenate the results.
///
/// Keys come out in pattern declaration order, then match order.
pub fn extract_keys(text: &str, patterns: &[KeyPattern]) -> Vec<String> {
    patterns.iter().fold(Vec::new(), |mut keys, pattern| {
        keys.extend(pattern.captures(text));
        keys
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_captures_every_match() {
        let pattern = KeyPattern::new(r"_t\('(.+?)'\)").unwrap();
        let keys = pattern.captures("_t('home.title') and _t('home.body')");
        assert_eq!(keys, vec!["home.title", "home.body"]);
    }

    #[test]
    fn test_greedy_pattern_stays_on_one_line() {
        let pattern = KeyPattern::new(r"_t\('(.+)'\)").unwrap();
        let keys = pattern.captures("_t('home.title')\n_t('home.body')\n");
        assert_eq!(keys, vec!["home.title", "home.body"]);
    }

    #[test]
    fn test_reused_pattern_starts_fresh() {
        let pattern = KeyPattern::new(r"_t\('(.+?)'\)").unwrap();
        let first = pattern.captures("_t('a') _t('b')");
        let second = pattern.captures("_t('a') _t('b')");
        assert_eq!(first, second);
        assert_eq!(pattern.captures("_t('c')"), vec!["c"]);
    }

    #[test]
    fn test_unset_group_is_skipped() {
        let pattern = KeyPattern::with_group(r#"t\('([^']+)'\)|t\("([^"]+)"\)"#, 1).unwrap();
        let keys = pattern.captures(r#"t('single') t("double") t('again')"#);
        assert_eq!(keys, vec!["single", "again"]);
    }

    #[test]
    fn test_custom_group() {
        let pattern = KeyPattern::with_group(r#"(i18n|t)\("([^"]+)"\)"#, 2).unwrap();
        assert_eq!(pattern.captures(r#"i18n("a.b") t("c")"#), vec!["a.b", "c"]);
    }

    #[test]
    fn test_group_zero_is_whole_match() {
        let pattern = KeyPattern::with_group(r"key\.\w+", 0).unwrap();
        assert_eq!(pattern.captures("key.one key.two"), vec!["key.one", "key.two"]);
    }

    #[test]
    fn test_missing_group_is_config_error() {
        let err = KeyPattern::new(r"_t\('.+'\)").unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
        assert!(err.to_string().contains("no capture group 1"));
    }

    #[test]
    fn test_malformed_regex_is_config_error() {
        let err = KeyPattern::new(r"_t\((").unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
        assert!(err.to_string().contains("invalid pattern"));
    }

    #[test]
    fn test_extract_keys_pattern_order() {
        let patterns = vec![
            KeyPattern::new(r"_t\('(.+?)'\)").unwrap(),
            KeyPattern::new(r#"data-translate="([^"]+)""#).unwrap(),
        ];
        let text = r#"<p data-translate="b.first"></p> _t('a.first') _t('a.second')"#;
        assert_eq!(
            extract_keys(text, &patterns),
            vec!["a.first", "a.second", "b.first"]
        );
    }

    #[test]
    fn test_extract_keys_keeps_duplicates() {
        let patterns = vec![KeyPattern::new(r"_t\('(.+?)'\)").unwrap()];
        assert_eq!(extract_keys("_t('a') _t('a')", &patterns), vec!["a", "a"]);
    }

    #[test]
    fn test_extract_keys_no_patterns_match() {
        let patterns = vec![KeyPattern::new(r"_t\('(.+?)'\)").unwrap()];
        assert!(extract_keys("nothing here", &patterns).is_empty());
    }
}
