//! Attribute maps: insertion-ordered, unique keys, string values.

use std::fmt;

use indexmap::IndexMap;

/// An insertion-ordered mapping from attribute name to value.
///
/// Re-inserting an existing name overwrites its value and keeps the name at
/// its original position. Values are stored as strings; anything implementing
/// [`Display`](fmt::Display) is stringified on insertion, so `42` becomes
/// `"42"`, `1.5` becomes `"1.5"` and `true` becomes `"true"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: IndexMap<String, String>,
}

impl Attributes {
    /// Create an empty attribute map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, stringifying the value with its `Display` impl.
    pub fn insert(&mut self, name: impl Into<String>, value: impl fmt::Display) {
        self.entries.insert(name.into(), value.to_string());
    }

    /// Remove an attribute, keeping the order of the remaining entries.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.entries.shift_remove(name)
    }

    /// Look up an attribute value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Whether the attribute is present.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Iterate `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterate attribute names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: fmt::Display,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (name, value) in iter {
            attrs.insert(name, value);
        }
        attrs
    }
}
