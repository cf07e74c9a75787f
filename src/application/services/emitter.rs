//! Fire-and-forget access event emission.
//!
//! Outcomes are counted in `access_events_total{outcome}` through the
//! `metrics` facade. The process installs no recorder of its own; counters
//! reach whichever global recorder the host sets up and are no-ops otherwise.

use std::sync::Arc;

use crate::domain::access_event::AccessEvent;
use crate::domain::publisher::{EventPublisher, PublishError};
use tracing::{debug, warn};

const EVENTS_METRIC: &str = "access_events_total";

/// Dispatches access events to the queue without blocking the caller.
///
/// Each event is published from its own detached task. The task is not tied to
/// the request that produced it: client disconnects, handler completion and
/// publish failures have no effect on each other. Delivery is at-most-once;
/// failures are logged and dropped.
#[derive(Clone)]
pub struct EventEmitter {
    publisher: Arc<dyn EventPublisher>,
}

impl EventEmitter {
    /// Creates a new emitter.
    pub fn new(publisher: Arc<dyn EventPublisher>) -> Self {
        Self { publisher }
    }

    /// Schedules `event` for publishing and returns immediately.
    ///
    /// If the queue client has not finished initializing the event is dropped
    /// rather than waited on.
    pub fn emit(&self, event: AccessEvent) {
        if !self.publisher.is_ready() {
            debug!(key = %event.key, "Queue client not ready, dropping access event");
            metrics::counter!(EVENTS_METRIC, "outcome" => "dropped").increment(1);
            return;
        }

        let publisher = self.publisher.clone();
        tokio::spawn(async move {
            match publisher.publish(&event).await {
                Ok(()) => {
                    debug!(key = %event.key, "Access event published");
                    metrics::counter!(EVENTS_METRIC, "outcome" => "published").increment(1);
                }
                Err(PublishError::NotReady) => {
                    debug!(key = %event.key, "Queue client not ready, dropping access event");
                    metrics::counter!(EVENTS_METRIC, "outcome" => "dropped").increment(1);
                }
                Err(e) => {
                    warn!(key = %event.key, error = %e, "Failed to publish access event");
                    metrics::counter!(EVENTS_METRIC, "outcome" => "failed").increment(1);
                }
            }
        });
    }
}
