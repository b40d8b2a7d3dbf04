use crate::state::AppState;
use axum::extract::{Request, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

pub const KEY_HEADER: &str = "x-acs-key";
pub const KEY_COOKIE: &str = "acs_internal_key";

/// Gate for the internal tooling surface.
///
/// Accepts a request when the `X-ACS-KEY` header or the `acs_internal_key`
/// cookie equals the configured secret. Without a configured secret every
/// request is rejected. All rejections are an identical bodyless 401.
pub async fn require_internal_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let Some(expected) = state.config.internal_key.as_deref() else {
        return StatusCode::UNAUTHORIZED.into_response();
    };

    let headers = request.headers();
    let header_ok = headers
        .get(KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == expected);
    let cookie_ok = cookie_value(headers, KEY_COOKIE).is_some_and(|v| v == expected);

    if header_ok || cookie_ok {
        next.run(request).await
    } else {
        StatusCode::UNAUTHORIZED.into_response()
    }
}

pub fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;
    raw.split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
}
