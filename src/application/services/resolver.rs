//! Key resolution service.

use std::sync::Arc;

use crate::domain::repositories::{StoreError, UrlRepository};
use tracing::debug;

/// Outcome of resolving a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The key exists; carries its target URL.
    Found(String),
    NotFound,
}

/// Resolves short keys to their target URLs.
///
/// Holds no state beyond the repository handle, so concurrent resolutions of
/// the same key never interact. There is no in-process cache: every call is a
/// fresh point read, and a store outage does not outlive the failed request.
#[derive(Clone)]
pub struct Resolver {
    repository: Arc<dyn UrlRepository>,
}

impl Resolver {
    /// Creates a new resolver.
    pub fn new(repository: Arc<dyn UrlRepository>) -> Self {
        Self { repository }
    }

    /// Looks up `key` and returns its target, or [`Resolution::NotFound`].
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the store cannot answer. This is distinct
    /// from a missing key.
    pub async fn resolve(&self, key: &str) -> Result<Resolution, StoreError> {
        match self.repository.find_by_key(key).await? {
            Some(mapping) => Ok(Resolution::Found(mapping.target)),
            None => {
                debug!(key, "Key not found");
                Ok(Resolution::NotFound)
            }
        }
    }
}
