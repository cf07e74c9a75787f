//! Access event model for asynchronous analytics publishing.

/// A record of a single successful redirect.
///
/// Constructed by the redirect handler only after the key resolved, handed to
/// [`crate::application::services::EventEmitter`] and dropped once the publish
/// attempt finishes. There is no local persistence or retry buffer.
///
/// `user_agent` carries the `User-Agent` header value byte for byte, including
/// obs-text bytes that are not valid UTF-8. It is `None` when the request had
/// no such header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessEvent {
    pub key: String,
    pub user_agent: Option<Vec<u8>>,
}

impl AccessEvent {
    /// Creates a new access event.
    ///
    /// # Examples
    ///
    /// ```
    /// use shortlink_redirect::domain::access_event::AccessEvent;
    ///
    /// let event = AccessEvent::new("abc".to_string(), Some(b"Mozilla/5.0".as_slice()));
    /// assert_eq!(event.key, "abc");
    /// assert_eq!(event.user_agent.as_deref(), Some(b"Mozilla/5.0".as_slice()));
    /// ```
    pub fn new(key: String, user_agent: Option<&[u8]>) -> Self {
        Self {
            key,
            user_agent: user_agent.map(<[u8]>::to_vec),
        }
    }
}
