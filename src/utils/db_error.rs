use crate::domain::repositories::StoreError;

/// Classifies a driver error as an outage or a query failure.
///
/// Connection-level problems (pool exhaustion, I/O, TLS, a closed pool, or the
/// server refusing the session) make the store unavailable; anything the
/// server reports about the statement itself is a query failure.
pub fn map_sqlx_error(e: sqlx::Error) -> StoreError {
    match e {
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::WorkerCrashed => StoreError::Unavailable(e.to_string()),
        sqlx::Error::Database(ref db) if is_connection_class(db.code().as_deref()) => {
            StoreError::Unavailable(e.to_string())
        }
        other => StoreError::Query(other.to_string()),
    }
}

/// SQLSTATE classes 08 (connection exception), 28 (invalid authorization) and
/// 57 (operator intervention, e.g. shutdown in progress).
fn is_connection_class(code: Option<&str>) -> bool {
    matches!(code, Some(c) if c.starts_with("08") || c.starts_with("28") || c.starts_with("57"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_timeout_is_unavailable() {
        assert!(matches!(
            map_sqlx_error(sqlx::Error::PoolTimedOut),
            StoreError::Unavailable(_)
        ));
    }

    #[test]
    fn test_row_not_found_is_query_error() {
        assert!(matches!(
            map_sqlx_error(sqlx::Error::RowNotFound),
            StoreError::Query(_)
        ));
    }

    #[test]
    fn test_connection_sqlstate_classes() {
        assert!(is_connection_class(Some("08006")));
        assert!(is_connection_class(Some("28P01")));
        assert!(is_connection_class(Some("57P01")));
        assert!(!is_connection_class(Some("42P01")));
        assert!(!is_connection_class(None));
    }
}
