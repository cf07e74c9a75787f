//! HTTP layer: handlers, response DTOs and middleware.
//!
//! - [`dto`] - Response bodies
//! - [`handlers`] - Redirect and health handlers
//! - [`middleware`] - Request tracing

pub mod dto;
pub mod handlers;
pub mod middleware;
