use std::{collections::HashSet, fmt, sync::Arc};

use serde_json::Value;

use super::tree::TranslationTree;

type DefaultFn = dyn Fn(&str) -> Value + Send + Sync;

/// Value given to keys that have no translation yet.
#[derive(Clone)]
pub enum DefaultTranslation {
    /// The same scalar for every key (`null` by default).
    Value(Value),
    /// A value computed from the key.
    FromKey(Arc<DefaultFn>),
}

impl DefaultTranslation {
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&str) -> Value + Send + Sync + 'static,
    {
        DefaultTranslation::FromKey(Arc::new(f))
    }

    pub fn value_for(&self, key: &str) -> Value {
        match self {
            DefaultTranslation::Value(value) => value.clone(),
            DefaultTranslation::FromKey(f) => f(key),
        }
    }
}

impl Default for DefaultTranslation {
    fn default() -> Self {
        DefaultTranslation::Value(Value::Null)
    }
}

impl fmt::Debug for DefaultTranslation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultTranslation::Value(value) => f.debug_tuple("Value").field(value).finish(),
            DefaultTranslation::FromKey(_) => f.write_str("FromKey(<fn>)"),
        }
    }
}

/// Counts of what a merge did to a tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Keys that received the default value. Keys that cannot be placed
    /// (a named segment inside an array) count as neither added nor kept.
    pub added: usize,
    /// Keys that already had a string or number translation.
    pub kept: usize,
}

/// A key counts as translated once it resolves to a string or a number.
pub fn is_translated(tree: &TranslationTree, key: &str) -> bool {
    matches!(
        tree.get_path(key),
        Some(Value::String(_) | Value::Number(_))
    )
}

/// Give every untranslated key in `keys` its default value.
///
/// Existing string and number leaves are never touched, and keys absent from
/// `keys` are left as they are. Repeated keys are no-ops after the first.
pub fn merge<'a>(
    tree: TranslationTree,
    keys: impl IntoIterator<Item = &'a str>,
    default: &DefaultTranslation,
) -> TranslationTree {
    merge_with_stats(tree, keys, default).0
}

/// Same as [`merge`], also reporting how many distinct keys were added or kept.
pub fn merge_with_stats<'a>(
    mut tree: TranslationTree,
    keys: impl IntoIterator<Item = &'a str>,
    default: &DefaultTranslation,
) -> (TranslationTree, MergeStats) {
    let mut stats = MergeStats::default();
    let mut seen: HashSet<&str> = HashSet::new();

    for key in keys {
        if !seen.insert(key) {
            continue;
        }
        if is_translated(&tree, key) {
            stats.kept += 1;
            continue;
        }
        if tree.set_path(key, default.value_for(key)) {
            stats.added += 1;
        }
    }

    (tree, stats)
}
