//! The ordered key-value store contract consumed by the entity layer.

use serde_json::Value;

use crate::error::StoreResult;

/// Item yielded by a range scan: storage key plus raw stored value.
pub type ScanItem = StoreResult<(String, Value)>;

/// An ordered key-value transaction handle.
///
/// The entity layer issues every read and write through this trait and
/// manages no transaction lifecycle of its own: callers open, commit, or
/// abort transactions and pass the live handle in. Implementations provide
/// atomicity and isolation for the read-modify-write inside `update`.
pub trait Store {
    /// Returns the raw value at `key`, or `None` when absent.
    fn get(&mut self, key: &str) -> StoreResult<Option<Value>>;

    /// Writes `value` at `key`, overwriting any existing value.
    fn put(&mut self, key: &str, value: Value) -> StoreResult<()>;

    /// Removes `key`. Must succeed whether or not the key exists.
    fn delete(&mut self, key: &str) -> StoreResult<()>;

    /// Enumerates entries whose key starts with `prefix`, in ascending
    /// lexicographic key order, beginning at `start_key` (inclusive) when
    /// given. Returning an iterator rather than a collection lets callers
    /// stop early without visiting the remainder of the prefix.
    fn scan<'a>(
        &'a mut self,
        prefix: &'a str,
        start_key: Option<&'a str>,
    ) -> StoreResult<Box<dyn Iterator<Item = ScanItem> + 'a>>;
}
