//! Backend client provider.
//!
//! Builds the store pool and the queue connection once per process, in the
//! background, and hands out shared handles to them. Request handlers that need
//! a client before it is ready wait on the same single construction; the
//! server watches [`BackendProvider::first_failure`] and stops if either
//! construction fails.

mod credentials;
mod error;
mod lazy_client;

pub use credentials::{
    AmbientCredentials, CredentialSource, KeyFileCredentials, StoreCredentials, select_source,
};
pub use error::ProviderError;
pub use lazy_client::{ClientStatus, LazyClient};

use std::str::FromStr;
use std::time::Duration;

use redis::AsyncCommands;
use redis::aio::ConnectionManager;
use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use tracing::info;
use url::Url;

use crate::config::{Config, QueueConfig, StoreConfig, mask_connection_string};

pub const STORE_CLIENT: &str = "store";
pub const QUEUE_CLIENT: &str = "queue";

/// Shared handles to the store and queue clients.
#[derive(Clone)]
pub struct BackendProvider {
    store: LazyClient<PgPool>,
    queue: LazyClient<ConnectionManager>,
}

impl BackendProvider {
    /// Starts both client constructions concurrently and returns immediately.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(config: &Config) -> Self {
        let store = LazyClient::spawn(STORE_CLIENT, connect_store(config.store.clone()));
        let queue = LazyClient::spawn(QUEUE_CLIENT, connect_queue(config.queue.clone()));
        Self { store, queue }
    }

    /// Assembles a provider from existing handles.
    pub fn from_parts(store: LazyClient<PgPool>, queue: LazyClient<ConnectionManager>) -> Self {
        Self { store, queue }
    }

    pub fn store(&self) -> LazyClient<PgPool> {
        self.store.clone()
    }

    pub fn queue(&self) -> LazyClient<ConnectionManager> {
        self.queue.clone()
    }

    /// Resolves with the first construction error; pends forever if both
    /// clients come up.
    pub async fn first_failure(&self) -> ProviderError {
        tokio::select! {
            e = self.store.failure() => e,
            e = self.queue.failure() => e,
        }
    }
}

/// Reports backend client construction state without touching the clients.
pub trait ReadinessProbe: Send + Sync {
    fn store_status(&self) -> ClientStatus;
    fn queue_status(&self) -> ClientStatus;
}

impl ReadinessProbe for BackendProvider {
    fn store_status(&self) -> ClientStatus {
        self.store.status()
    }

    fn queue_status(&self) -> ClientStatus {
        self.queue.status()
    }
}

/// Builds the store connection pool.
///
/// Credentials are resolved through [`select_source`]; the pool is opened with
/// one eager connection so unreachable or misconfigured stores fail here.
///
/// # Errors
///
/// Returns [`ProviderError`] on a malformed endpoint, unreadable key file, or
/// failed connection.
pub async fn connect_store(config: StoreConfig) -> Result<PgPool, ProviderError> {
    let options =
        PgConnectOptions::from_str(&config.database_url).map_err(|e| ProviderError::Config {
            client: STORE_CLIENT,
            reason: e.to_string(),
        })?;

    let source = select_source(&config.key_file);
    let credentials = source.resolve().await?;
    let options = credentials.apply(options);

    info!(
        "Connecting to store at {}",
        mask_connection_string(&config.database_url)
    );

    let pool = PgPoolOptions::new()
        .min_connections(config.pool_min)
        .max_connections(config.pool_max)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout))
        .connect_with(options)
        .await
        .map_err(|e| ProviderError::Connect {
            client: STORE_CLIENT,
            reason: e.to_string(),
        })?;

    info!("✓ Connected to store");
    Ok(pool)
}

/// Builds the queue connection and verifies the credentials with a PING.
///
/// # Errors
///
/// Returns [`ProviderError::Config`] if the token pair or destination is
/// missing or the endpoint is malformed, and [`ProviderError::Connect`] if the
/// server rejects the connection or the credentials.
pub async fn connect_queue(config: QueueConfig) -> Result<ConnectionManager, ProviderError> {
    if config.stream.trim().is_empty() {
        return Err(queue_config_error("queue destination not set"));
    }

    let url = queue_connection_url(&config)?;

    info!(
        "Connecting to queue at {}",
        mask_connection_string(url.as_str())
    );

    let client = redis::Client::open(url.as_str()).map_err(|e| ProviderError::Config {
        client: QUEUE_CLIENT,
        reason: e.to_string(),
    })?;

    let mut manager = ConnectionManager::new(client)
        .await
        .map_err(|e| queue_connect_error(e.to_string()))?;

    manager
        .ping::<()>()
        .await
        .map_err(|e| queue_connect_error(format!("PING failed: {}", e)))?;

    info!(stream = %config.stream, "✓ Connected to queue");
    Ok(manager)
}

/// Embeds the token pair into the queue endpoint as ACL username/password.
fn queue_connection_url(config: &QueueConfig) -> Result<Url, ProviderError> {
    let credentials = &config.credentials;
    if credentials.token_id.is_empty() || credentials.token_secret.is_empty() {
        return Err(queue_config_error("queue token not set"));
    }

    let mut url = Url::parse(&config.url).map_err(|e| ProviderError::Config {
        client: QUEUE_CLIENT,
        reason: format!("invalid queue URL: {}", e),
    })?;

    if url.scheme() != "redis" && url.scheme() != "rediss" {
        return Err(queue_config_error("queue URL must use redis:// or rediss://"));
    }

    url.set_username(&credentials.token_id)
        .and_then(|_| url.set_password(Some(&credentials.token_secret)))
        .map_err(|_| queue_config_error("queue URL cannot carry credentials"))?;

    Ok(url)
}

fn queue_config_error(reason: &str) -> ProviderError {
    ProviderError::Config {
        client: QUEUE_CLIENT,
        reason: reason.to_string(),
    }
}

fn queue_connect_error(reason: String) -> ProviderError {
    ProviderError::Connect {
        client: QUEUE_CLIENT,
        reason,
    }
}
