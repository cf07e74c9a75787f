//! PostgreSQL implementation of the key lookup repository.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::{StoreError, UrlRepository};
use crate::infrastructure::provider::LazyClient;
use crate::utils::db_error::map_sqlx_error;

/// PostgreSQL repository reading the `urls` table.
///
/// Holds a handle to the lazily built pool; the first lookups wait for pool
/// construction, later ones find it ready. Each lookup runs in its own
/// serializable, read-only transaction.
pub struct PgUrlRepository {
    pool: LazyClient<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository over a (possibly still initializing) pool.
    pub fn new(pool: LazyClient<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn find_by_key(&self, key: &str) -> Result<Option<UrlMapping>, StoreError> {
        let pool = self
            .pool
            .get()
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        let mut tx = pool.begin().await.map_err(map_sqlx_error)?;

        sqlx::query("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE, READ ONLY")
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;

        let row: Option<(String, String)> =
            sqlx::query_as("SELECT key, target FROM urls WHERE key = $1")
                .bind(key)
                .fetch_optional(&mut *tx)
                .await
                .map_err(map_sqlx_error)?;

        tx.commit().await.map_err(map_sqlx_error)?;

        Ok(row.map(|(key, target)| UrlMapping::new(key, target)))
    }
}
