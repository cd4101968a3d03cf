//! Resolved component values.

use std::collections::BTreeMap;

use serde::Serialize;

/// Component name to resolved value (a binary or a config path).
///
/// Keys are written once; a second insert for the same component keeps the
/// first value. Iteration is in component name order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResolvedMap(BTreeMap<String, String>);

impl ResolvedMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, component: &str, value: String) {
        self.0.entry(component.to_string()).or_insert(value);
    }

    /// Resolved value for a component.
    pub fn get(&self, component: &str) -> Option<&str> {
        self.0.get(component).map(String::as_str)
    }

    /// Number of resolved components.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no component was resolved.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(component, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for ResolvedMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            let k = k.into();
            map.insert(&k, v.into());
        }
        map
    }
}
