use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A nested translation document addressed by dotted paths.
///
/// Key format: "Navigation.signOut" or "HomePage.cta.startNow".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationTree(Map<String, Value>);

impl TranslationTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a JSON value, which must be an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Resolve a dotted path.
    ///
    /// Objects are walked by segment, arrays by numeric index.
    pub fn get_path(&self, key: &str) -> Option<&Value> {
        let mut parts = key.split('.');
        let first = parts.next()?;
        let mut current = self.0.get(first)?;
        for part in parts {
            current = match current {
                Value::Object(map) => map.get(part)?,
                Value::Array(items) => items.get(array_index(part)?)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Set the value at a dotted path, creating containers as needed.
    ///
    /// A missing intermediate becomes an array when the next segment is an
    /// index (`items.0`) and an object otherwise. Arrays are padded with
    /// `null` up to the index being written. A scalar intermediate (string,
    /// number, bool or null) is replaced, dropping its previous value.
    ///
    /// Returns `false` when the path runs into an array with a segment that
    /// is not an index. The tree is left untouched in that case.
    pub fn set_path(&mut self, key: &str, value: Value) -> bool {
        let parts: Vec<&str> = key.split('.').collect();
        let Some((head, rest)) = parts.split_first() else {
            return false;
        };

        if rest.is_empty() {
            self.0.insert(head.to_string(), value);
            return true;
        }

        let child = self.0.entry(head.to_string()).or_insert(Value::Null);
        set_nested(child, rest, value)
    }
}

impl From<Map<String, Value>> for TranslationTree {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Insert a value below `node`, walking or creating containers.
fn set_nested(node: &mut Value, path: &[&str], value: Value) -> bool {
    let Some((head, rest)) = path.split_first() else {
        *node = value;
        return true;
    };

    match node {
        Value::Array(items) => {
            let Some(index) = array_index(head) else {
                return false;
            };
            if index >= items.len() {
                items.resize(index + 1, Value::Null);
            }
            set_nested(&mut items[index], rest, value)
        }
        Value::Object(map) => {
            let child = map.entry(head.to_string()).or_insert(Value::Null);
            set_nested(child, rest, value)
        }
        _ => {
            *node = empty_container(head);
            set_nested(node, path, value)
        }
    }
}

/// The container a segment needs: an array for an index, an object otherwise.
fn empty_container(segment: &str) -> Value {
    if array_index(segment).is_some() {
        Value::Array(Vec::new())
    } else {
        Value::Object(Map::new())
    }
}

/// Parse a segment as an array index ("01" is not an index).
fn array_index(segment: &str) -> Option<usize> {
    segment
        .parse::<usize>()
        .ok()
        .filter(|index| index.to_string() == segment)
}
