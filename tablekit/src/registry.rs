//! Named-entry registries with overlay merging.
//!
//! Icons, localization strings and the aggregation/filter/sorting function
//! tables are all registries: a built-in table that callers extend or
//! override by name.

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// An ordered map from entry name to value.
///
/// Iteration is always in key order, so two registries with the same entries
/// serialize identically.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Registry<V> {
    entries: BTreeMap<String, V>,
}

impl<V> Default for Registry<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Registry<V> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Insert an entry, returning the value it replaced.
    pub fn insert(&mut self, name: impl Into<String>, value: V) -> Option<V> {
        self.entries.insert(name.into(), value)
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, value: V) -> Self {
        self.insert(name, value);
        self
    }

    /// Look up an entry by name.
    pub fn get(&self, name: &str) -> Option<&V> {
        self.entries.get(name)
    }

    /// Whether an entry with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry names in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<V: Clone> Registry<V> {
    /// Overlay `user` on top of this registry.
    ///
    /// The result holds every entry from both; on a name collision the entry
    /// from `user` wins. Neither input is modified.
    pub fn overlay(&self, user: &Registry<V>) -> Registry<V> {
        let mut entries = self.entries.clone();
        entries.extend(
            user.entries
                .iter()
                .map(|(name, value)| (name.clone(), value.clone())),
        );
        Registry { entries }
    }
}

// Function registries hold closures, so only the names are printed.
impl<V> fmt::Debug for Registry<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.entries.keys()).finish()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for Registry<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl<V> IntoIterator for Registry<V> {
    type Item = (String, V);
    type IntoIter = btree_map::IntoIter<String, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Serialize a registry as the list of its entry names.
///
/// Used for registries whose values cannot be serialized (functions).
pub(crate) fn serialize_names<S, V>(
    registry: &Arc<Registry<V>>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_seq(registry.keys())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_user_wins() {
        let builtin: Registry<&str> = [("a", "builtin-a"), ("b", "builtin-b")]
            .into_iter()
            .collect();
        let user: Registry<&str> = [("b", "user-b"), ("c", "user-c")].into_iter().collect();

        let merged = builtin.overlay(&user);

        assert_eq!(merged.len(), 3);
        assert_eq!(merged.get("a"), Some(&"builtin-a"));
        assert_eq!(merged.get("b"), Some(&"user-b"));
        assert_eq!(merged.get("c"), Some(&"user-c"));
        assert_eq!(builtin.get("b"), Some(&"builtin-b"));
        assert!(!builtin.contains("c"));
    }

    #[test]
    fn test_debug_prints_names() {
        let registry = Registry::new().with("x", 1).with("y", 2);
        assert_eq!(format!("{:?}", registry), r#"{"x", "y"}"#);
    }
}
