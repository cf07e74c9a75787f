//! Infrastructure layer for external integrations.
//!
//! - [`provider`] - One-time, background construction of backend clients
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`queue`] - Redis Streams event publisher

pub mod persistence;
pub mod provider;
pub mod queue;
