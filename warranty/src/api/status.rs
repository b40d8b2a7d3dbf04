use crate::errors::ApiError;
use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use rowstore::claim::{ALLOWED_STATUSES, STATUS_SHIPPED};
use rowstore::{Action, Claim};
use serde::Deserialize;
use serde_json::{Value, json};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdate {
    #[serde(default)]
    pub lookup_type: String,
    pub lookup_value: String,
    pub status: String,
    #[serde(default)]
    pub internal_notes: String,
}

/// Staff-driven status change, `POST /warranty/status`.
///
/// Forwards an `updateStatus` action to the row-store. When the new status
/// is `Shipped` and the row-store reports a customer email for the matched
/// row, exactly one shipped notification goes out to that address.
pub async fn update(
    State(state): State<AppState>,
    Json(request): Json<StatusUpdate>,
) -> Result<Json<Value>, ApiError> {
    if !ALLOWED_STATUSES.contains(&request.status.as_str()) {
        return Err(ApiError::Validation(format!(
            "status must be one of: {}",
            ALLOWED_STATUSES.join(", ")
        )));
    }
    if request.lookup_value.trim().is_empty() {
        return Err(ApiError::Validation("lookupValue is required".into()));
    }

    let lookup_type = if request.lookup_type.is_empty() {
        "originalOrderNumber".to_string()
    } else {
        request.lookup_type
    };

    let action = Action::UpdateStatus {
        lookup_type,
        lookup_value: request.lookup_value.clone(),
        status: request.status.clone(),
        internal_notes: request.internal_notes,
    };

    let reply = state.rowstore.forward(&action).await?;

    // The row-store reports lookup failures in-band with HTTP 200; a
    // non-ok reply means nothing was updated.
    if reply.get("status").and_then(Value::as_str) != Some("ok") {
        let detail = reply
            .get("message")
            .and_then(Value::as_str)
            .or_else(|| reply.get("status").and_then(Value::as_str))
            .unwrap_or("reply carried no status")
            .to_string();
        return Err(ApiError::UpstreamRejected(detail));
    }

    let row = reply.get("row").cloned().unwrap_or(Value::Null);

    if request.status == STATUS_SHIPPED {
        let claim = claim_from_reply(&reply, &request.lookup_value);
        if !claim.customer_email.is_empty() {
            if let Err(err) = state.notifier.notify_shipped(&claim).await {
                tracing::error!(error = %err, "shipped notification failed");
                return Ok(Json(json!({
                    "status": "partial",
                    "row": row,
                    "warning": "shipped notification failed",
                })));
            }
        }
    }

    Ok(Json(json!({ "status": "ok", "row": row })))
}

/// The shipped notice only needs the handful of fields the row-store echoes
/// back for the matched row.
fn claim_from_reply(reply: &Value, lookup_value: &str) -> Claim {
    let field = |name: &str| -> String {
        reply
            .get(name)
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string()
    };

    let order = field("originalOrderNumber");
    Claim {
        customer_email: field("customerEmail"),
        customer_name: field("customerName"),
        replacement_tracking: field("replacementTracking"),
        original_order_number: if order.is_empty() {
            lookup_value.to_string()
        } else {
            order
        },
        ..Default::default()
    }
}
