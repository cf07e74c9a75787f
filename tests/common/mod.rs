#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use shortlink_redirect::application::services::{EventEmitter, Resolver};
use shortlink_redirect::domain::access_event::AccessEvent;
use shortlink_redirect::domain::entities::UrlMapping;
use shortlink_redirect::domain::publisher::{EventPublisher, PublishError};
use shortlink_redirect::domain::repositories::{StoreError, UrlRepository};
use shortlink_redirect::infrastructure::provider::{ClientStatus, ReadinessProbe};
use shortlink_redirect::routes;
use shortlink_redirect::state::AppState;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;
use tokio::sync::mpsc;

/// Store double: a map plus a switch that simulates an outage.
#[derive(Default)]
pub struct InMemoryUrlRepository {
    mappings: RwLock<HashMap<String, String>>,
    unavailable: AtomicBool,
    lookups: AtomicUsize,
}

impl InMemoryUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, key: &str, target: &str) {
        self.mappings
            .write()
            .unwrap()
            .insert(key.to_string(), target.to_string());
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UrlRepository for InMemoryUrlRepository {
    async fn find_by_key(&self, key: &str) -> Result<Option<UrlMapping>, StoreError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);

        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("connection refused".to_string()));
        }

        Ok(self
            .mappings
            .read()
            .unwrap()
            .get(key)
            .map(|target| UrlMapping::new(key, target.as_str())))
    }
}

/// Queue double: records every publish attempt, optionally failing it or
/// never completing it.
pub struct RecordingPublisher {
    attempts: mpsc::UnboundedSender<AccessEvent>,
    ready: AtomicBool,
    failing: AtomicBool,
    hanging: AtomicBool,
}

impl RecordingPublisher {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<AccessEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let publisher = Self {
            attempts: tx,
            ready: AtomicBool::new(true),
            failing: AtomicBool::new(false),
            hanging: AtomicBool::new(false),
        };
        (publisher, rx)
    }

    pub fn set_ready(&self, ready: bool) {
        self.ready.store(ready, Ordering::SeqCst);
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Makes every later publish record its attempt and then never return.
    pub fn set_hanging(&self, hanging: bool) {
        self.hanging.store(hanging, Ordering::SeqCst);
    }
}

#[async_trait]
impl EventPublisher for RecordingPublisher {
    async fn publish(&self, event: &AccessEvent) -> Result<(), PublishError> {
        let _ = self.attempts.send(event.clone());

        if self.hanging.load(Ordering::SeqCst) {
            std::future::pending::<()>().await;
        }
        if self.failing.load(Ordering::SeqCst) {
            return Err(PublishError::Send("queue outage".to_string()));
        }
        Ok(())
    }

    fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }
}

pub struct StaticReadiness {
    pub store: ClientStatus,
    pub queue: ClientStatus,
}

impl ReadinessProbe for StaticReadiness {
    fn store_status(&self) -> ClientStatus {
        self.store
    }

    fn queue_status(&self) -> ClientStatus {
        self.queue
    }
}

pub struct TestApp {
    pub state: AppState,
    pub repository: Arc<InMemoryUrlRepository>,
    pub publisher: Arc<RecordingPublisher>,
    pub events: mpsc::UnboundedReceiver<AccessEvent>,
}

impl TestApp {
    pub fn server(&self) -> TestServer {
        TestServer::new(routes::router(self.state.clone())).unwrap()
    }
}

pub fn create_test_app() -> TestApp {
    create_test_app_with_readiness(ClientStatus::Ready, ClientStatus::Ready)
}

pub fn create_test_app_with_readiness(store: ClientStatus, queue: ClientStatus) -> TestApp {
    let repository = Arc::new(InMemoryUrlRepository::new());
    let (publisher, events) = RecordingPublisher::new();
    let publisher = Arc::new(publisher);

    let state = AppState::new(
        Resolver::new(repository.clone()),
        EventEmitter::new(publisher.clone()),
        Arc::new(StaticReadiness { store, queue }),
    );

    TestApp {
        state,
        repository,
        publisher,
        events,
    }
}

/// Waits for the next publish attempt.
pub async fn next_event(events: &mut mpsc::UnboundedReceiver<AccessEvent>) -> AccessEvent {
    tokio::time::timeout(Duration::from_secs(2), events.recv())
        .await
        .expect("no access event was published")
        .expect("publisher channel closed")
}

/// Asserts that no publish attempt happens within a short grace period.
pub async fn assert_no_event(events: &mut mpsc::UnboundedReceiver<AccessEvent>) {
    let result = tokio::time::timeout(Duration::from_millis(200), events.recv()).await;
    assert!(result.is_err(), "unexpected access event: {:?}", result);
}
