//! Structured document values
//!
//! A document is a tree of named string values, addressed by slash-separated
//! element paths. Used for configuration and test fixtures.

use serde_json::Value;

/// An in-memory tree of named string values.
///
/// Lookup is literal: `get("root/string")` walks the object keys `root` then
/// `string` and returns the string value found there, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Value,
}

impl Document {
    /// Wrap a JSON value as a document
    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    /// Look up a string value by element path
    pub fn get(&self, path: &str) -> Option<&str> {
        let mut current = &self.root;
        for key in path.split('/') {
            current = current.as_object()?.get(key)?;
        }
        current.as_str()
    }

    /// The underlying value tree
    pub fn value(&self) -> &Value {
        &self.root
    }
}
