//! Domain layer: entities, access events and the traits the infrastructure
//! layer implements.
//!
//! - [`entities`] - Key-to-target mappings
//! - [`repositories`] - Store lookup trait
//! - [`access_event`] - Per-redirect analytics event
//! - [`publisher`] - Queue publishing trait
//!
//! # Redirect Flow
//!
//! 1. HTTP handler resolves the key via [`repositories::UrlRepository`]
//! 2. On a hit, the redirect response is built
//! 3. An [`access_event::AccessEvent`] is handed to a background task
//! 4. The task publishes it through [`publisher::EventPublisher`]

pub mod access_event;
pub mod entities;
pub mod publisher;
pub mod repositories;
