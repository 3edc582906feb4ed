use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};

use super::names::is_attribute_name;
use crate::error::LookupError;

const RENDER_HEADER: &str = "Available Attributes:";

/// Public operations of [`AttributeDictionary`], reported by
/// [`AttributeDictionary::members`] next to the dynamic keys.
pub const STRUCTURAL_MEMBERS: &[&str] = &[
    "attribute_names",
    "by_key",
    "by_key_mut",
    "by_name",
    "by_name_mut",
    "contains_key",
    "delete_key",
    "delete_name",
    "get",
    "is_empty",
    "iter",
    "keys",
    "len",
    "members",
    "new",
    "render",
    "set_key",
    "set_name",
    "values",
];

#[derive(Debug, Clone)]
pub struct AttributeDictionary<V> {
    entries: HashMap<String, V>,
    order: Vec<String>,
}

impl<V> AttributeDictionary<V> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Inserts or overwrites `key`, returning the previous value.
    /// An overwritten key keeps its original position.
    pub fn set_key(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        if let Some(slot) = self.entries.get_mut(&key) {
            return Some(std::mem::replace(slot, value));
        }
        self.order.push(key.clone());
        self.entries.insert(key, value);
        None
    }

    /// Attribute-style assignment. Same effect on the store as [`Self::set_key`],
    /// but only for valid attribute names.
    pub fn set_name(
        &mut self,
        name: impl Into<String>,
        value: V,
    ) -> Result<Option<V>, LookupError> {
        let name = name.into();
        if !is_attribute_name(&name) {
            return Err(LookupError::invalid_attribute_name(name));
        }
        Ok(self.set_key(name, value))
    }

    pub fn by_key(&self, key: &str) -> Result<&V, LookupError> {
        self.entries
            .get(key)
            .ok_or_else(|| LookupError::key_not_found(key))
    }

    pub fn by_key_mut(&mut self, key: &str) -> Result<&mut V, LookupError> {
        self.entries
            .get_mut(key)
            .ok_or_else(|| LookupError::key_not_found(key))
    }

    pub fn by_name(&self, name: &str) -> Result<&V, LookupError> {
        if !is_attribute_name(name) {
            return Err(LookupError::attribute_not_found(name));
        }
        self.entries
            .get(name)
            .ok_or_else(|| LookupError::attribute_not_found(name))
    }

    pub fn by_name_mut(&mut self, name: &str) -> Result<&mut V, LookupError> {
        if !is_attribute_name(name) {
            return Err(LookupError::attribute_not_found(name));
        }
        self.entries
            .get_mut(name)
            .ok_or_else(|| LookupError::attribute_not_found(name))
    }

    pub fn delete_key(&mut self, key: &str) -> Result<V, LookupError> {
        self.remove(key)
            .ok_or_else(|| LookupError::key_not_found(key))
    }

    pub fn delete_name(&mut self, name: &str) -> Result<V, LookupError> {
        if !is_attribute_name(name) {
            return Err(LookupError::attribute_not_found(name));
        }
        self.remove(name)
            .ok_or_else(|| LookupError::attribute_not_found(name))
    }

    fn remove(&mut self, key: &str) -> Option<V> {
        let value = self.entries.remove(key)?;
        self.order.retain(|k| k != key);
        Some(value)
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.order
            .iter()
            .filter_map(|key| self.entries.get_key_value(key))
            .map(|(key, value)| (key.as_str(), value))
    }

    /// Keys reachable through the attribute view.
    pub fn attribute_names(&self) -> impl Iterator<Item = &str> {
        self.keys().filter(|key| is_attribute_name(key))
    }

    /// Structural members merged with the present keys, sorted and de-duplicated.
    pub fn members(&self) -> Vec<String> {
        let mut members: BTreeSet<&str> = STRUCTURAL_MEMBERS.iter().copied().collect();
        members.extend(self.keys());
        members.into_iter().map(str::to_string).collect()
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl<V> Default for AttributeDictionary<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: PartialEq> PartialEq for AttributeDictionary<V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<V: Eq> Eq for AttributeDictionary<V> {}

impl<V> fmt::Display for AttributeDictionary<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RENDER_HEADER}")?;
        for key in self.keys() {
            writeln!(f, " * {key}")?;
        }
        Ok(())
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for AttributeDictionary<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dict = Self::new();
        dict.extend(iter);
        dict
    }
}

impl<K: Into<String>, V> Extend<(K, V)> for AttributeDictionary<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set_key(key, value);
        }
    }
}

impl<K: Into<String>, V, const N: usize> From<[(K, V); N]> for AttributeDictionary<V> {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<V: Serialize> Serialize for AttributeDictionary<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct DictionaryVisitor<V>(PhantomData<V>);

impl<'de, V: Deserialize<'de>> Visitor<'de> for DictionaryVisitor<V> {
    type Value = AttributeDictionary<V>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map with string keys")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut dict = AttributeDictionary::new();
        while let Some((key, value)) = access.next_entry::<String, V>()? {
            dict.set_key(key, value);
        }
        Ok(dict)
    }
}

/// Entries keep document order.
impl<'de, V: Deserialize<'de>> Deserialize<'de> for AttributeDictionary<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(DictionaryVisitor(PhantomData))
    }
}
