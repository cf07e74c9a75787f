//! Outbound interface for access events.

use crate::domain::access_event::AccessEvent;
use async_trait::async_trait;
use thiserror::Error;

/// Failures publishing an access event.
///
/// These never reach the HTTP client; the emitter logs and drops them.
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("queue client is not ready")]
    NotReady,

    #[error("failed to send access event: {0}")]
    Send(String),
}

/// Publishes access events to the analytics queue.
///
/// # Implementations
///
/// - [`crate::infrastructure::queue::RedisStreamPublisher`] - Redis Streams
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Sends one message for `event`. At-most-once: callers never retry.
    async fn publish(&self, event: &AccessEvent) -> Result<(), PublishError>;

    /// Returns `true` once the underlying client can accept messages without
    /// waiting for its construction.
    fn is_ready(&self) -> bool {
        true
    }
}
