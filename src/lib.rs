//! # Short Link Redirect
//!
//! Resolves short keys to target URLs, answers with a `302` redirect, and
//! publishes an access event for every successful redirect without making the
//! client wait for it.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Mappings, access events, store and queue traits
//! - **Application Layer** ([`application`]) - Resolver and event emitter
//! - **Infrastructure Layer** ([`infrastructure`]) - Backend client provider,
//!   PostgreSQL lookups, Redis Streams publishing
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs and middleware
//!
//! ## Request Flow
//!
//! `GET /{key}` → store point read → `302 Found` (or `404 Key not found`) →
//! access event published from a detached task.
//!
//! Backend clients are built once, in the background, while the server is
//! already accepting requests. Early requests wait for the store pool; access
//! events are dropped until the queue connection is ready. If either client
//! fails to build, the server stops.
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::application::services::{EventEmitter, Resolution, Resolver};
    pub use crate::domain::access_event::AccessEvent;
    pub use crate::domain::entities::UrlMapping;
    pub use crate::domain::publisher::{EventPublisher, PublishError};
    pub use crate::domain::repositories::{StoreError, UrlRepository};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
