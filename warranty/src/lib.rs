pub mod api;
pub mod auth;
pub mod config;
pub mod errors;
pub mod state;

use axum::Router;
use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use state::AppState;
use tokio::net::TcpListener;

pub fn build_router(state: AppState) -> Router {
    let internal = Router::new()
        .route("/internal/api/phase2", post(api::proxy::forward))
        .route("/internal/intake", get(api::pages::intake))
        .route("/internal/production", get(api::pages::production))
        .route("/internal/qc", get(api::pages::qc))
        .route_layer(from_fn_with_state(
            state.clone(),
            auth::require_internal_key,
        ));

    Router::new()
        .route("/health", get(api::health::health))
        .route("/warranty", post(api::intake::submit))
        .route("/warranty/status", post(api::status::update))
        .route("/internal/login", get(api::pages::login))
        .merge(internal)
        .with_state(state)
}

pub async fn serve(state: AppState) -> Result<(), std::io::Error> {
    let addr = format!(
        "{}:{}",
        state.config.listener.host, state.config.listener.port
    );
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "warranty service listening");
    axum::serve(listener, build_router(state)).await
}
