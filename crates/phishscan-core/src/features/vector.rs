//! Ordered name → value mapping produced by the extractor.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Ordered mapping from feature name to value.
///
/// Insertion order is kept and the first value inserted under a name wins,
/// so merging sub-vectors never overrides an earlier feature.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureVector {
    entries: Vec<(&'static str, f64)>,
}

impl FeatureVector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Inserts `value` under `name` unless the name is already present.
    /// Returns whether the value was inserted.
    pub fn insert(&mut self, name: &'static str, value: f64) -> bool {
        if self.contains(name) {
            return false;
        }
        self.entries.push((name, value));
        true
    }

    /// Appends every entry of `other` whose name is not yet present.
    pub fn merge(&mut self, other: FeatureVector) {
        for (name, value) in other.entries {
            self.insert(name, value);
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|&(_, v)| v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| *n == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl DoubleEndedIterator<Item = &'static str> + '_ {
        self.entries.iter().map(|&(n, _)| n)
    }

    pub fn values(&self) -> impl DoubleEndedIterator<Item = f64> + '_ {
        self.entries.iter().map(|&(_, v)| v)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&'static str, f64)> + '_ {
        self.entries.iter().copied()
    }
}

impl Serialize for FeatureVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_insert_wins() {
        let mut v = FeatureVector::new();
        assert!(v.insert("a", 1.0));
        assert!(!v.insert("a", 2.0));
        assert_eq!(v.get("a"), Some(1.0));
        assert_eq!(v.len(), 1);
    }

    #[test]
    fn merge_keeps_order_and_existing_values() {
        let mut a = FeatureVector::new();
        a.insert("x", 1.0);
        a.insert("y", 2.0);
        let mut b = FeatureVector::new();
        b.insert("y", 20.0);
        b.insert("z", 30.0);
        a.merge(b);
        assert_eq!(a.names().collect::<Vec<_>>(), ["x", "y", "z"]);
        assert_eq!(a.values().collect::<Vec<_>>(), [1.0, 2.0, 30.0]);
    }

    #[test]
    fn serializes_as_ordered_json_object() {
        let mut v = FeatureVector::new();
        v.insert("urlLen", 31.0);
        v.insert("ArgUrlRatio", 0.5);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, r#"{"urlLen":31.0,"ArgUrlRatio":0.5}"#);
    }
}
