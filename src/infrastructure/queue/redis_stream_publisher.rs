//! Redis Streams publisher for access events.

use async_trait::async_trait;
use redis::aio::ConnectionManager;

use crate::domain::access_event::AccessEvent;
use crate::domain::publisher::{EventPublisher, PublishError};
use crate::infrastructure::provider::LazyClient;

/// Field holding the message body (the accessed key).
pub const BODY_FIELD: &str = "body";
/// Field holding the raw `User-Agent` header bytes.
pub const USER_AGENT_FIELD: &str = "useragent";

/// Appends one stream entry per access event.
///
/// Entry layout: `body` = key, `useragent` = raw header value written as a
/// binary argument, so non-UTF-8 bytes arrive unchanged (omitted when the
/// request had none). With `max_len` set, the stream is trimmed
/// approximately (`MAXLEN ~`) on every append.
///
/// Never waits for the connection: until it is ready every publish fails with
/// [`PublishError::NotReady`].
pub struct RedisStreamPublisher {
    conn: LazyClient<ConnectionManager>,
    stream: String,
    max_len: Option<usize>,
}

impl RedisStreamPublisher {
    pub fn new(conn: LazyClient<ConnectionManager>, stream: String, max_len: Option<usize>) -> Self {
        Self {
            conn,
            stream,
            max_len,
        }
    }

    /// Builds the `XADD` command for `event`.
    fn xadd(&self, event: &AccessEvent) -> redis::Cmd {
        let mut cmd = redis::cmd("XADD");
        cmd.arg(&self.stream);
        if let Some(max_len) = self.max_len {
            cmd.arg("MAXLEN").arg("~").arg(max_len);
        }
        cmd.arg("*").arg(BODY_FIELD).arg(&event.key);
        if let Some(user_agent) = &event.user_agent {
            cmd.arg(USER_AGENT_FIELD).arg(user_agent.as_slice());
        }
        cmd
    }
}

#[async_trait]
impl EventPublisher for RedisStreamPublisher {
    async fn publish(&self, event: &AccessEvent) -> Result<(), PublishError> {
        let conn = self.conn.try_get().ok_or(PublishError::NotReady)?;
        let mut conn = ConnectionManager::clone(&conn);

        self.xadd(event)
            .query_async::<String>(&mut conn)
            .await
            .map(|_id| ())
            .map_err(|e| PublishError::Send(e.to_string()))
    }

    fn is_ready(&self) -> bool {
        self.conn.try_get().is_some()
    }
}
