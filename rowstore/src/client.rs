use crate::action::Action;
use crate::claim::{Claim, claim_row};
use crate::config::RowStoreConfig;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

const STATUS_BODY_LIMIT: usize = 512;
const PREVIEW_LIMIT: usize = 256;

#[derive(thiserror::Error, Debug)]
pub enum RowStoreError {
    #[error("row-store request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("row-store returned {status}: {body}")]
    UpstreamStatus { status: u16, body: String },
    #[error("malformed row-store response: {preview}")]
    MalformedResponse { preview: String },
    #[error("row-store rejected append: {0}")]
    AppendRejected(String),
    #[error("could not encode action: {0}")]
    Encode(serde_json::Error),
}

/// Reply to a successful append. The row number is assigned by the
/// row-store; absence means the endpoint did not report one.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct AppendOutcome {
    pub status: String,
    pub row: Option<u64>,
    pub message: Option<String>,
}

/// Thin HTTP client for the spreadsheet-backed row-store.
///
/// Every call makes exactly one outbound request. There is no retry and no
/// idempotency key, so callers must not assume at-most-once delivery.
#[derive(Clone)]
pub struct RowStoreClient {
    client: reqwest::Client,
    url: url::Url,
    secret: String,
}

impl RowStoreClient {
    pub fn new(config: &RowStoreConfig) -> Result<Self, RowStoreError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(RowStoreClient {
            client,
            url: config.url.clone(),
            secret: config.secret.clone(),
        })
    }

    /// Appends one claim as a new row, returning the row-store's reply.
    pub async fn append(&self, claim: &Claim) -> Result<AppendOutcome, RowStoreError> {
        let payload = serde_json::json!({
            "action": "append",
            "key": self.secret,
            "values": claim_row(claim),
        });

        let body = self.post(&payload).await?;
        let outcome: AppendOutcome = serde_json::from_str(&body).map_err(|_| {
            RowStoreError::MalformedResponse {
                preview: bounded(&body, PREVIEW_LIMIT),
            }
        })?;

        if outcome.status != "ok" {
            return Err(RowStoreError::AppendRejected(
                outcome.message.unwrap_or_else(|| outcome.status.clone()),
            ));
        }

        Ok(outcome)
    }

    /// Forwards an internal action with the server-held secret attached and
    /// returns the parsed reply verbatim. Interpretation of the reply (for
    /// example a lookup's ok / not_found / multiple outcome) is entirely the
    /// caller's concern.
    pub async fn forward(&self, action: &Action) -> Result<Value, RowStoreError> {
        let mut payload = serde_json::to_value(action).map_err(RowStoreError::Encode)?;
        payload["key"] = Value::String(self.secret.clone());

        let body = self.post(&payload).await?;
        serde_json::from_str(&body).map_err(|_| RowStoreError::MalformedResponse {
            preview: bounded(&body, PREVIEW_LIMIT),
        })
    }

    async fn post(&self, payload: &Value) -> Result<String, RowStoreError> {
        let response = self
            .client
            .post(self.url.clone())
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(status = %status, "row-store returned failure");
            return Err(RowStoreError::UpstreamStatus {
                status: status.as_u16(),
                body: bounded(&body, STATUS_BODY_LIMIT),
            });
        }

        Ok(body)
    }
}

/// Truncates upstream bodies before they reach logs or error messages.
fn bounded(body: &str, limit: usize) -> String {
    if body.len() <= limit {
        return body.to_string();
    }
    let mut end = limit;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{} [truncated]", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RowStoreConfig;
    use axum::extract::State;
    use axum::response::IntoResponse;
    use axum::routing::post;
    use axum::{Json, Router};
    use std::sync::{Arc, Mutex};

    type Received = Arc<Mutex<Vec<Value>>>;

    async fn spawn_stub(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub listener");
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}/")
    }

    fn client_for(url: &str) -> RowStoreClient {
        let config = RowStoreConfig {
            url: url::Url::parse(url).unwrap(),
            secret: "s3cret".into(),
            timeout_secs: 5,
        };
        config.validate().expect("loopback config");
        RowStoreClient::new(&config).unwrap()
    }

    fn recording_stub(reply: Value) -> (Router, Received) {
        let received: Received = Arc::new(Mutex::new(Vec::new()));
        let handler_state = (received.clone(), reply);
        let app = Router::new().route(
            "/",
            post(
                |State((received, reply)): State<(Received, Value)>, Json(body): Json<Value>| async move {
                    received.lock().unwrap().push(body);
                    Json(reply)
                },
            ),
        )
        .with_state(handler_state);
        (app, received)
    }

    #[tokio::test]
    async fn append_sends_ordered_values_and_secret() {
        let (app, received) = recording_stub(serde_json::json!({"status": "ok", "row": 7}));
        let url = spawn_stub(app).await;

        let claim = Claim {
            source: "web".into(),
            customer_email: "a@b.com".into(),
            original_order_number: "ORD1".into(),
            ..Default::default()
        };

        let outcome = client_for(&url).append(&claim).await.unwrap();
        assert_eq!(outcome.row, Some(7));

        let sent = received.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0]["action"], "append");
        assert_eq!(sent[0]["key"], "s3cret");
        assert_eq!(sent[0]["values"][2], "a@b.com");
        assert_eq!(sent[0]["values"][5], "ORD1");
    }

    #[tokio::test]
    async fn append_surfaces_upstream_failure() {
        let app = Router::new().route(
            "/",
            post(|| async {
                (axum::http::StatusCode::INTERNAL_SERVER_ERROR, "sheet unavailable").into_response()
            }),
        );
        let url = spawn_stub(app).await;

        let err = client_for(&url).append(&Claim::default()).await.unwrap_err();
        match err {
            RowStoreError::UpstreamStatus { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "sheet unavailable");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn append_rejection_carries_message() {
        let (app, _) =
            recording_stub(serde_json::json!({"status": "error", "message": "bad key"}));
        let url = spawn_stub(app).await;

        let err = client_for(&url).append(&Claim::default()).await.unwrap_err();
        assert!(matches!(err, RowStoreError::AppendRejected(message) if message == "bad key"));
    }

    #[tokio::test]
    async fn forward_injects_secret_and_relays_reply() {
        let reply = serde_json::json!({
            "status": "ok",
            "matches": [{"row": 12, "status": "Submitted"}],
        });
        let (app, received) = recording_stub(reply.clone());
        let url = spawn_stub(app).await;

        let action = Action::Lookup {
            original_order_number: "335508".into(),
        };
        let relayed = client_for(&url).forward(&action).await.unwrap();
        assert_eq!(relayed, reply);

        let sent = received.lock().unwrap();
        assert_eq!(sent[0]["action"], "lookup");
        assert_eq!(sent[0]["originalOrderNumber"], "335508");
        assert_eq!(sent[0]["key"], "s3cret");
    }

    #[tokio::test]
    async fn non_json_reply_reports_bounded_preview() {
        let long_body = "<html>".to_string() + &"x".repeat(1000);
        let app = Router::new().route("/", post(move || async move { long_body.clone() }));
        let url = spawn_stub(app).await;

        let err = client_for(&url)
            .forward(&Action::QcReasons)
            .await
            .unwrap_err();
        match err {
            RowStoreError::MalformedResponse { preview } => {
                assert!(preview.starts_with("<html>"));
                assert!(preview.len() < 300);
                assert!(preview.ends_with("[truncated]"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
