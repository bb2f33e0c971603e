//! Ordered key/value storage for one INI section.
//!
//! [`Section`] wraps an [`IndexMap`] so that entries are written back in the order they
//! were read or added. Keys are stored lowercased; lookups through [`Section::get`]
//! normalize the key first, so callers may use any case.
//!
//! ## Examples
//!
//! ```rust
//! use ini_doc::{Section, Value};
//!
//! let mut section = Section::new("server");
//! section.insert("Host", Value::from("localhost"));
//! section.insert("port", Value::from(8080));
//!
//! assert_eq!(section.name(), "SERVER");
//! assert_eq!(section.get("HOST").and_then(|v| v.as_str()), Some("localhost"));
//! let keys: Vec<_> = section.keys().cloned().collect();
//! assert_eq!(keys, vec!["host", "port"]);
//! ```

use crate::format::{normalize_key, normalize_section};
use crate::Value;
use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// A named, insertion-ordered map of lowercased keys to [`Value`]s.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Section {
    name: String,
    entries: IndexMap<String, Value>,
}

impl Section {
    /// Creates an empty section. The name is uppercased.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Section {
            name: normalize_section(name),
            entries: IndexMap::new(),
        }
    }

    /// The normalized (uppercase) section name. Empty for the global section.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Inserts or overwrites a key. The key is lowercased.
    ///
    /// If the section already contained this key, the old value is returned and the
    /// key keeps its original position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_doc::{Section, Value};
    ///
    /// let mut section = Section::new("a");
    /// assert!(section.insert("key", Value::from(1)).is_none());
    /// assert_eq!(section.insert("KEY", Value::from(2)), Some(Value::from(1)));
    /// ```
    pub fn insert(&mut self, key: &str, value: Value) -> Option<Value> {
        self.entries.insert(normalize_key(key), value)
    }

    /// Returns the value stored under `key`, compared case-insensitively.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(&normalize_key(key))
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(&normalize_key(key))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over the keys of the section, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.entries.keys()
    }

    /// Returns an iterator over the values of the section, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.entries.values()
    }

    /// Returns an iterator over the key-value pairs of the section, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Section {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Serializes as a map of key to typed value; the section name is left to the parent.
impl Serialize for Section {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}
