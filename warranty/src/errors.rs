use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use rowstore::RowStoreError;
use serde_json::json;

/// Request-level failures, mapped onto the service's HTTP error taxonomy.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("row-store error: {0}")]
    Upstream(#[from] RowStoreError),
    /// The row-store answered 200 but reported failure in the body.
    #[error("row-store rejected request: {0}")]
    UpstreamRejected(String),
    /// Deliberately carries no detail; the 401 must not reveal which
    /// credential check failed.
    #[error("unauthorized")]
    Unauthorized,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED.into_response(),
            ApiError::Validation(message) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "status": "error", "message": message })),
            )
                .into_response(),
            ApiError::Upstream(err) => {
                tracing::error!(error = %err, "row-store call failed");
                (
                    StatusCode::BAD_GATEWAY,
                    Json(json!({ "status": "error", "message": err.to_string() })),
                )
                    .into_response()
            }
            ApiError::UpstreamRejected(detail) => {
                tracing::error!(detail = %detail, "row-store rejected request");
                (
                    StatusCode::BAD_GATEWAY,
                    Json(json!({ "status": "error", "message": detail })),
                )
                    .into_response()
            }
        }
    }
}
