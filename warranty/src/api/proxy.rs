use crate::errors::ApiError;
use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use rowstore::Action;
use serde_json::Value;

/// Authenticated pass-through to the row-store's scripting endpoint,
/// `POST /internal/api/phase2`.
///
/// The body must parse as a known action and must not carry a `key` field;
/// the server attaches its own secret so the secret never reaches the
/// browser. The upstream JSON reply is relayed untouched, including the
/// three-way lookup outcome (`ok` / `not_found` / `multiple`) that only the
/// caller interprets.
pub async fn forward(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    if body.get("key").is_some() {
        return Err(ApiError::Validation(
            "key is not accepted from callers".into(),
        ));
    }

    let action: Action = serde_json::from_value(body)
        .map_err(|err| ApiError::Validation(format!("invalid action: {err}")))?;

    tracing::debug!(action = ?action, "forwarding internal action");
    let reply = state.rowstore.forward(&action).await?;
    Ok(Json(reply))
}
