//! Field Paths
//!
//! A `FieldPath` identifies a field location inside a dataset schema as an
//! ordered sequence of name parts, rendered in dotted form (`comment.text`).
//! Repeated-field wildcards use the `*` part.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Wildcard part standing for "every element" of a repeated field.
pub const PATH_WILDCARD: &str = "*";

/// Location of a field within a schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldPath(Vec<String>);

impl FieldPath {
    pub fn new(parts: Vec<String>) -> Self {
        FieldPath(parts)
    }

    /// Parse a dotted path like `comment.text` into its parts.
    ///
    /// Empty parts are dropped: `a..b` parses the same as `a.b`, and an
    /// empty string parses to the empty (root) path. An empty part could
    /// never name a schema field.
    pub fn parse(dotted: &str) -> Self {
        FieldPath(
            dotted
                .split('.')
                .filter(|part| !part.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn parts(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Child path with one more part appended.
    pub fn child(&self, part: impl Into<String>) -> Self {
        let mut parts = self.0.clone();
        parts.push(part.into());
        FieldPath(parts)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

impl From<Vec<String>> for FieldPath {
    fn from(parts: Vec<String>) -> Self {
        FieldPath(parts)
    }
}

impl From<&[&str]> for FieldPath {
    fn from(parts: &[&str]) -> Self {
        FieldPath(parts.iter().map(|p| p.to_string()).collect())
    }
}
