//! Application layer services.
//!
//! Services consume the domain traits and give HTTP handlers a small API:
//!
//! - [`services::Resolver`] - Key to target resolution
//! - [`services::EventEmitter`] - Detached access event publishing

pub mod services;
