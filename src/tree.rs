//! Hierarchical validation-failure reports.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Hierarchical validation-failure report: one `_errors` list per object
/// path, with a nested entry for each field that failed.
///
/// Serializes to the shape callers observe:
/// `{"_errors": [], "str": {"_errors": ["Required"]}}`.
///
/// Absence of a tree means the value conforms to its schema; presence means
/// the value was not applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorTree {
    /// Messages attached to this level (object-level or type mismatches).
    #[serde(rename = "_errors")]
    pub errors: Vec<String>,

    /// Per-field reports, keyed by field name.
    #[serde(flatten)]
    pub fields: BTreeMap<String, ErrorTree>,
}

impl ErrorTree {
    /// An empty tree with no failures recorded yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// A tree carrying a single root-level message.
    pub fn root(message: impl Into<String>) -> Self {
        Self {
            errors: vec![message.into()],
            fields: BTreeMap::new(),
        }
    }

    /// Records a message against a named field.
    pub fn push_field(&mut self, name: impl Into<String>, message: impl Into<String>) {
        self.fields
            .entry(name.into())
            .or_default()
            .errors
            .push(message.into());
    }

    /// Attaches a nested report under a named field.
    pub fn insert_field(&mut self, name: impl Into<String>, tree: ErrorTree) {
        self.fields.insert(name.into(), tree);
    }

    /// True when neither this level nor any nested field holds a message.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.fields.values().all(ErrorTree::is_empty)
    }

    /// Flattens the tree into `(path, message)` pairs, root messages first,
    /// nested paths dot-joined.
    pub fn flatten(&self) -> Vec<(String, String)> {
        let mut out = Vec::new();
        self.collect("", &mut out);
        out
    }

    fn collect(&self, path: &str, out: &mut Vec<(String, String)>) {
        for message in &self.errors {
            out.push((path.to_string(), message.clone()));
        }
        for (name, sub) in &self.fields {
            let child = if path.is_empty() {
                name.clone()
            } else {
                format!("{path}.{name}")
            };
            sub.collect(&child, out);
        }
    }
}

impl fmt::Display for ErrorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (path, message) in self.flatten() {
            if !first {
                write!(f, "; ")?;
            }
            first = false;
            if path.is_empty() {
                write!(f, "{message}")?;
            } else {
                write!(f, "{path}: {message}")?;
            }
        }
        Ok(())
    }
}
