//! The in-memory ledger state of a mock environment.
use std::{collections::BTreeMap, ops::Bound};

/// Committed key-value state. Keys are unique and kept in order so that range
/// queries are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerStore {
    entries: BTreeMap<String, Vec<u8>>,
}

impl LedgerStore {
    /// An empty ledger.
    pub fn new() -> Self { Self::default() }

    pub fn get(&self, key: &str) -> Option<&[u8]> { self.entries.get(key).map(Vec::as_slice) }

    /// Store `value` under `key`, returning the previous value.
    pub fn put(&mut self, key: &str, value: Vec<u8>) -> Option<Vec<u8>> {
        self.entries.insert(key.to_string(), value)
    }

    /// Remove `key`, returning the value it had.
    pub fn delete(&mut self, key: &str) -> Option<Vec<u8>> { self.entries.remove(key) }

    /// Entries with keys in `[start, end)`. An empty bound is unbounded. A
    /// range with `start > end` is empty.
    pub fn range(&self, start: &str, end: &str) -> Vec<(String, Vec<u8>)> {
        if !start.is_empty() && !end.is_empty() && start > end {
            return Vec::new();
        }
        let lower = if start.is_empty() {
            Bound::Unbounded
        } else {
            Bound::Included(start)
        };
        let upper = if end.is_empty() {
            Bound::Unbounded
        } else {
            Bound::Excluded(end)
        };
        self.entries
            .range::<str, _>((lower, upper))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    pub fn contains_key(&self, key: &str) -> bool { self.entries.contains_key(key) }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Iterate over all entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value.as_slice()))
    }
}
