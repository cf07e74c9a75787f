//! Business logic services for the application layer.

pub mod emitter;
pub mod resolver;

pub use emitter::EventEmitter;
pub use resolver::{Resolution, Resolver};
