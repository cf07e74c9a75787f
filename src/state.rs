use std::sync::Arc;

use crate::application::services::{EventEmitter, Resolver};
use crate::config::QueueConfig;
use crate::infrastructure::persistence::PgUrlRepository;
use crate::infrastructure::provider::{BackendProvider, ReadinessProbe};
use crate::infrastructure::queue::RedisStreamPublisher;

/// Shared, read-only state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub resolver: Resolver,
    pub emitter: EventEmitter,
    pub readiness: Arc<dyn ReadinessProbe>,
}

impl AppState {
    pub fn new(
        resolver: Resolver,
        emitter: EventEmitter,
        readiness: Arc<dyn ReadinessProbe>,
    ) -> Self {
        Self {
            resolver,
            emitter,
            readiness,
        }
    }

    /// Wires the PostgreSQL resolver and Redis publisher to the provider's
    /// lazily built clients.
    pub fn from_provider(provider: &BackendProvider, queue: &QueueConfig) -> Self {
        let repository = Arc::new(PgUrlRepository::new(provider.store()));
        let publisher = Arc::new(RedisStreamPublisher::new(
            provider.queue(),
            queue.stream.clone(),
            queue.max_len,
        ));

        Self::new(
            Resolver::new(repository),
            EventEmitter::new(publisher),
            Arc::new(provider.clone()),
        )
    }
}
