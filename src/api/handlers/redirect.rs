//! Handler for short key redirects.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::application::services::Resolution;
use crate::domain::access_event::AccessEvent;
use crate::error::AppError;
use crate::state::AppState;

/// Body returned when a key does not exist.
pub const NOT_FOUND_BODY: &str = "Key not found";

/// Redirects a short key to its target URL.
///
/// # Endpoint
///
/// `GET /{key}`
///
/// # Request Flow
///
/// 1. Resolve the key with a single store read
/// 2. On a hit, build a `302 Found` response with `Location: <target>`
/// 3. Hand an access event (key + raw `User-Agent` bytes) to the emitter, which
///    publishes it from a detached task
/// 4. Return the redirect without waiting for the publish
///
/// Misses and store failures emit nothing. An empty key never reaches this
/// handler: `/` is routed to [`empty_key_handler`].
///
/// # Errors
///
/// - 404 with body `Key not found` if the key does not exist
/// - 503 if the store is unreachable, 500 on other store failures
pub async fn redirect_handler(
    Path(key): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let target = match state.resolver.resolve(&key).await? {
        Resolution::Found(target) => target,
        Resolution::NotFound => return Err(AppError::not_found(NOT_FOUND_BODY)),
    };

    let location = HeaderValue::try_from(target.as_str()).map_err(|e| {
        error!(key = %key, error = %e, "Stored target is not a valid Location header");
        AppError::internal("Invalid redirect target")
    })?;

    let response = (StatusCode::FOUND, [(header::LOCATION, location)]).into_response();

    let user_agent = headers.get(header::USER_AGENT).map(HeaderValue::as_bytes);
    state.emitter.emit(AccessEvent::new(key, user_agent));

    Ok(response)
}

/// Rejects requests to `/`, where the key segment is empty.
pub async fn empty_key_handler() -> AppError {
    AppError::bad_request("Key must not be empty")
}
