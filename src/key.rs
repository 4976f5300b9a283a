//! Key derivation for prefix-scoped entity storage.

/// Separator between prefix and entity id in storage keys.
const SEPARATOR: char = '/';

/// Derives storage keys from a fixed prefix and extracts ids back out of
/// keys yielded by range scans.
///
/// Keys have the form `<prefix>/<id>`. With the single-character separator,
/// lexicographic order on the full key coincides with lexicographic order on
/// the id under a fixed prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyspace {
    scan_prefix: String,
}

impl Keyspace {
    pub fn new(prefix: impl Into<String>) -> Self {
        let mut scan_prefix = prefix.into();
        scan_prefix.push(SEPARATOR);
        Self { scan_prefix }
    }

    /// The namespace string this keyspace was built from.
    pub fn prefix(&self) -> &str {
        &self.scan_prefix[..self.scan_prefix.len() - SEPARATOR.len_utf8()]
    }

    /// The bound handed to range scans: `<prefix>/`. Scanning with the bare
    /// prefix would also capture sibling namespaces (`e1` matching `e10`).
    pub fn scan_prefix(&self) -> &str {
        &self.scan_prefix
    }

    /// Storage key for an entity id: `<prefix>/<id>`.
    pub fn key_for(&self, id: &str) -> String {
        format!("{}{}", self.scan_prefix, id)
    }

    /// Extracts the entity id from a scanned key. Returns `None` when the
    /// key does not lie under this keyspace; a conforming scan never yields
    /// such a key.
    pub fn id_from<'a>(&self, key: &'a str) -> Option<&'a str> {
        key.strip_prefix(self.scan_prefix.as_str())
    }
}
