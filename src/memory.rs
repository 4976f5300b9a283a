//! In-memory store backed by an ordered map.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::StoreResult;
use crate::store::{ScanItem, Store};

/// An ordered in-memory [`Store`].
///
/// Useful as a test double and as a zero-setup backend. The `BTreeMap`
/// provides the ascending key order the scan contract requires; operations
/// are infallible.
#[derive(Debug, Clone, Default)]
pub struct MemStore {
    entries: BTreeMap<String, Value>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries across all prefixes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Store for MemStore {
    fn get(&mut self, key: &str) -> StoreResult<Option<Value>> {
        Ok(self.entries.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: Value) -> StoreResult<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn delete(&mut self, key: &str) -> StoreResult<()> {
        self.entries.remove(key);
        Ok(())
    }

    fn scan<'a>(
        &'a mut self,
        prefix: &'a str,
        start_key: Option<&'a str>,
    ) -> StoreResult<Box<dyn Iterator<Item = ScanItem> + 'a>> {
        // Keys sharing a prefix are contiguous under lexicographic order, so
        // a range from max(prefix, start_key) bounded by starts_with is the
        // whole scan.
        let from = match start_key {
            Some(start) if start > prefix => start.to_string(),
            _ => prefix.to_string(),
        };
        let iter = self
            .entries
            .range(from..)
            .take_while(move |(key, _)| key.starts_with(prefix))
            .map(|(key, value)| Ok((key.clone(), value.clone())));
        Ok(Box::new(iter))
    }
}
