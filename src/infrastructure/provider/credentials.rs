//! Store credential resolution strategies.
//!
//! The store client prefers a local key file and falls back to ambient
//! credentials (endpoint URL userinfo and the standard `PG*` environment)
//! when no key file exists. The choice is made once, when the client is built.

use std::fmt;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Deserialize;
use sqlx::postgres::PgConnectOptions;
use tracing::info;

use super::error::ProviderError;

/// Credentials to layer on top of the store endpoint.
///
/// `None` fields leave whatever the endpoint already specifies untouched.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct StoreCredentials {
    pub user: Option<String>,
    pub password: Option<String>,
}

impl fmt::Debug for StoreCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreCredentials")
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}

impl StoreCredentials {
    /// Applies these credentials to connection options.
    pub fn apply(&self, mut options: PgConnectOptions) -> PgConnectOptions {
        if let Some(user) = &self.user {
            options = options.username(user);
        }
        if let Some(password) = &self.password {
            options = options.password(password);
        }
        options
    }
}

/// A pluggable way of obtaining store credentials.
#[async_trait]
pub trait CredentialSource: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    async fn resolve(&self) -> Result<StoreCredentials, ProviderError>;
}

#[derive(Deserialize)]
struct KeyFile {
    user: String,
    password: String,
}

/// Reads credentials from a JSON key file: `{"user": "...", "password": "..."}`.
pub struct KeyFileCredentials {
    path: PathBuf,
}

impl KeyFileCredentials {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CredentialSource for KeyFileCredentials {
    fn name(&self) -> &'static str {
        "key-file"
    }

    async fn resolve(&self) -> Result<StoreCredentials, ProviderError> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            ProviderError::Credentials(format!("cannot read {}: {}", self.path.display(), e))
        })?;

        let key: KeyFile = serde_json::from_str(&raw).map_err(|e| {
            ProviderError::Credentials(format!("malformed key file {}: {}", self.path.display(), e))
        })?;

        Ok(StoreCredentials {
            user: Some(key.user),
            password: Some(key.password),
        })
    }
}

/// Uses whatever the environment already provides.
pub struct AmbientCredentials;

#[async_trait]
impl CredentialSource for AmbientCredentials {
    fn name(&self) -> &'static str {
        "ambient"
    }

    async fn resolve(&self) -> Result<StoreCredentials, ProviderError> {
        Ok(StoreCredentials::default())
    }
}

/// Picks the key file when it exists, ambient credentials otherwise.
pub fn select_source(key_file: &Path) -> Box<dyn CredentialSource> {
    let source: Box<dyn CredentialSource> = if key_file.is_file() {
        Box::new(KeyFileCredentials::new(key_file))
    } else {
        Box::new(AmbientCredentials)
    };

    info!(
        source = source.name(),
        key_file = %key_file.display(),
        "Selected store credential source"
    );
    source
}
