//! Repository trait for key lookups.

use crate::domain::entities::UrlMapping;
use async_trait::async_trait;
use thiserror::Error;

/// Failures reaching the key-value store.
///
/// A missing key is not an error: lookups report it as `Ok(None)`.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The backend could not be reached, refused authentication, or its client
    /// never finished initializing.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The backend answered but the query itself failed.
    #[error("store query failed: {0}")]
    Query(String),
}

/// Read-only access to key-to-target mappings.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Finds the mapping for `key` with a single point read.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlMapping))` if the key exists
    /// - `Ok(None)` if it does not
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the store cannot answer.
    async fn find_by_key(&self, key: &str) -> Result<Option<UrlMapping>, StoreError>;
}
