//! One-shot, shared backend client initialization.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::watch;
use tracing::{error, info};

use super::error::ProviderError;

enum State<T> {
    Pending,
    Ready(Arc<T>),
    Failed(ProviderError),
}

/// Observable initialization state, for health reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientStatus {
    Pending,
    Ready,
    Failed,
}

/// A backend client constructed at most once, in the background.
///
/// [`LazyClient::spawn`] starts the construction on its own task and returns
/// immediately. The outcome is published through a `watch` channel, so every
/// clone observes the same single attempt: concurrent callers of
/// [`LazyClient::get`] all wait on it and receive the same `Arc<T>`, or the
/// same error. A failed construction is never retried.
pub struct LazyClient<T> {
    name: &'static str,
    rx: watch::Receiver<State<T>>,
}

impl<T> Clone for LazyClient<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            rx: self.rx.clone(),
        }
    }
}

impl<T: Send + Sync + 'static> LazyClient<T> {
    /// Spawns `init` and returns a handle to its eventual result.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn spawn<F>(name: &'static str, init: F) -> Self
    where
        F: Future<Output = Result<T, ProviderError>> + Send + 'static,
    {
        let (tx, rx) = watch::channel(State::Pending);

        tokio::spawn(async move {
            let state = match init.await {
                Ok(client) => {
                    info!(client = name, "Backend client ready");
                    State::Ready(Arc::new(client))
                }
                Err(e) => {
                    error!(client = name, error = %e, "Backend client initialization failed");
                    State::Failed(e)
                }
            };
            tx.send_replace(state);
        });

        Self { name, rx }
    }

    /// Wraps an already constructed client.
    pub fn ready(name: &'static str, client: T) -> Self {
        let (_tx, rx) = watch::channel(State::Ready(Arc::new(client)));
        Self { name, rx }
    }

    /// Returns the client, waiting for construction if it is still running.
    ///
    /// # Errors
    ///
    /// Returns the construction error, identical for every caller, or
    /// [`ProviderError::Aborted`] if the construction task died.
    pub async fn get(&self) -> Result<Arc<T>, ProviderError> {
        let mut rx = self.rx.clone();
        let state = rx
            .wait_for(|state| !matches!(state, State::Pending))
            .await
            .map_err(|_| ProviderError::Aborted(self.name))?;

        match &*state {
            State::Ready(client) => Ok(client.clone()),
            State::Failed(e) => Err(e.clone()),
            State::Pending => Err(ProviderError::Aborted(self.name)),
        }
    }

    /// Returns the client only if construction already succeeded.
    pub fn try_get(&self) -> Option<Arc<T>> {
        match &*self.rx.borrow() {
            State::Ready(client) => Some(client.clone()),
            _ => None,
        }
    }

    pub fn status(&self) -> ClientStatus {
        match &*self.rx.borrow() {
            State::Pending => ClientStatus::Pending,
            State::Ready(_) => ClientStatus::Ready,
            State::Failed(_) => ClientStatus::Failed,
        }
    }

    /// Resolves with the construction error; never resolves if construction
    /// succeeds.
    pub async fn failure(&self) -> ProviderError {
        match self.get().await {
            Ok(_) => std::future::pending().await,
            Err(e) => e,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}
