//! Key-to-target mapping as stored by the administrative service.

/// A short key and the absolute URL it redirects to.
///
/// Rows are written by the administrative API and are read-only here. The
/// store guarantees at most one mapping per key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMapping {
    pub key: String,
    pub target: String,
}

impl UrlMapping {
    pub fn new(key: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            target: target.into(),
        }
    }
}
