//! Queue publisher implementations.

mod redis_stream_publisher;

pub use redis_stream_publisher::{BODY_FIELD, RedisStreamPublisher, USER_AGENT_FIELD};
