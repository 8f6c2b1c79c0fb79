//! Case-insensitive lookup table keyed by display name.

use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// Normalize a lookup name: trim surrounding whitespace and lowercase.
pub fn normalize_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Table with keys lowercased once at build time.
#[derive(Debug, Clone)]
pub struct IconTable<T> {
    entries: HashMap<String, T>,
    /// Lowercased keys in source order.
    order: Vec<String>,
}

impl<T> Default for IconTable<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<T> IconTable<T> {
    /// Build from `(key, value)` pairs in source order.
    ///
    /// Keys that collide after lowercasing keep the first entry.
    pub fn from_entries<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, T)>,
        K: AsRef<str>,
    {
        let mut table = Self::default();
        for (key, value) in entries {
            let key = key.as_ref();
            let lowered = key.to_lowercase();
            if table.entries.contains_key(&lowered) {
                tracing::warn!(
                    "Ignoring icon key {:?}: already defined as {:?}",
                    key,
                    lowered
                );
                continue;
            }
            table.order.push(lowered.clone());
            table.entries.insert(lowered, value);
        }
        table
    }

    /// Look up a name, ignoring case and surrounding whitespace.
    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries.get(&normalize_key(name))
    }

    /// Lowercased keys in source order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Map entries deserialized in document order.
///
/// `HashMap` would lose the order needed to decide which of two
/// case-colliding keys wins.
#[derive(Debug)]
pub(crate) struct OrderedEntries<T>(pub Vec<(String, T)>);

impl<T> Default for OrderedEntries<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for OrderedEntries<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for EntriesVisitor<T> {
            type Value = OrderedEntries<T>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of icon names to entries")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, T>()? {
                    entries.push((key, value));
                }
                Ok(OrderedEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_get() {
        let table = IconTable::from_entries([("GitHub", 1), ("Matrix", 2)]);
        assert_eq!(table.get("github"), Some(&1));
        assert_eq!(table.get("GITHUB"), Some(&1));
        assert_eq!(table.get("  Matrix \n"), Some(&2));
        assert_eq!(table.get("git"), None);
    }

    #[test]
    fn test_first_key_wins() {
        let table = IconTable::from_entries([("XMPP", "first"), ("xmpp", "second")]);
        assert_eq!(table.get("xmpp"), Some(&"first"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_keys_keep_order() {
        let table = IconTable::from_entries([("b", ()), ("A", ()), ("c", ())]);
        assert_eq!(table.keys().collect::<Vec<_>>(), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_ordered_entries_from_json() {
        let entries: OrderedEntries<u32> =
            serde_json::from_str(r#"{"zeta": 1, "Alpha": 2, "alpha": 3}"#).unwrap();
        let keys: Vec<_> = entries.0.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["zeta", "Alpha", "alpha"]);
    }
}
