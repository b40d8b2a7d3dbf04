use crate::errors::ApiError;
use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use rowstore::Claim;
use serde_json::{Value, json};

/// Public claim intake, `POST /warranty`.
///
/// The row-store write is the system of record, so it strictly precedes any
/// email. A failed write aborts the request before a single message is
/// composed. After a confirmed write, the staff notice and the customer
/// confirmation are attempted independently; a mail failure downgrades the
/// reply to `partial` rather than failing a request whose durable record
/// already exists.
pub async fn submit(
    State(state): State<AppState>,
    Json(claim): Json<Claim>,
) -> Result<Json<Value>, ApiError> {
    if claim.customer_email.trim().is_empty() {
        return Err(ApiError::Validation("customerEmail is required".into()));
    }
    if claim.original_order_number.trim().is_empty() {
        return Err(ApiError::Validation(
            "originalOrderNumber is required".into(),
        ));
    }

    tracing::info!(
        order = %claim.original_order_number,
        customer = %claim.customer_email,
        "warranty claim received"
    );

    let outcome = state.rowstore.append(&claim).await?;
    tracing::info!(row = ?outcome.row, "claim row appended");

    let mut warnings = Vec::new();

    if let Err(err) = state.notifier.notify_staff(&claim, outcome.row).await {
        tracing::error!(error = %err, "staff notification failed");
        warnings.push("staff notification failed");
    }

    if let Err(err) = state.notifier.notify_customer(&claim).await {
        tracing::error!(error = %err, "customer confirmation failed");
        warnings.push("customer confirmation failed");
    }

    if warnings.is_empty() {
        Ok(Json(json!({ "status": "ok", "row": outcome.row })))
    } else {
        Ok(Json(json!({
            "status": "partial",
            "row": outcome.row,
            "warning": warnings.join("; "),
        })))
    }
}
