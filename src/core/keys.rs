use std::collections::HashSet;

/// Every key extracted during a run, in arrival order.
///
/// Arrival order is file order, then pattern order, then match order.
/// Duplicates are kept; merging the same key twice is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyCollection {
    keys: Vec<String>,
}

impl KeyCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&mut self, keys: impl IntoIterator<Item = String>) {
        self.keys.extend(keys);
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// Number of distinct keys, for reporting.
    pub fn unique_count(&self) -> usize {
        self.keys.iter().collect::<HashSet<_>>().len()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_preserves_arrival_order_and_duplicates() {
        let mut keys = KeyCollection::new();
        keys.extend(vec!["b".to_string(), "a".to_string()]);
        keys.extend(vec!["b".to_string()]);

        assert_eq!(keys.iter().collect::<Vec<_>>(), vec!["b", "a", "b"]);
        assert_eq!(keys.len(), 3);
        assert_eq!(keys.unique_count(), 2);
    }

    #[test]
    fn test_empty() {
        let keys = KeyCollection::new();
        assert!(keys.is_empty());
        assert_eq!(keys.unique_count(), 0);
    }
}
