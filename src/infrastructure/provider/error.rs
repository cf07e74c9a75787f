//! Backend client construction errors.

use thiserror::Error;

/// Errors building a backend client.
///
/// Cloneable so a single failed construction can be handed to every caller
/// that was waiting on it.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("invalid {client} configuration: {reason}")]
    Config {
        client: &'static str,
        reason: String,
    },

    #[error("failed to resolve store credentials: {0}")]
    Credentials(String),

    #[error("failed to connect {client}: {reason}")]
    Connect {
        client: &'static str,
        reason: String,
    },

    /// The construction task ended without publishing a result.
    #[error("{0} client initialization aborted")]
    Aborted(&'static str),
}
