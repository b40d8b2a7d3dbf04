use crate::auth::KEY_COOKIE;
use crate::state::AppState;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{AppendHeaders, Html, IntoResponse, Redirect, Response};

pub const INTAKE_PAGE: &str = include_str!("../../assets/intake.html");
pub const PRODUCTION_PAGE: &str = include_str!("../../assets/production.html");
pub const QC_PAGE: &str = include_str!("../../assets/qc.html");

pub async fn intake() -> Html<&'static str> {
    Html(INTAKE_PAGE)
}

pub async fn production() -> Html<&'static str> {
    Html(PRODUCTION_PAGE)
}

pub async fn qc() -> Html<&'static str> {
    Html(QC_PAGE)
}

/// Convenience cookie setter for staff who already hold the secret. This is
/// not authentication; it only spares the browser a header plugin. See
/// DESIGN.md for why it is kept as a documented placeholder.
pub async fn login(State(state): State<AppState>) -> Response {
    match state.config.internal_key.as_deref() {
        Some(key) => {
            let cookie = format!("{KEY_COOKIE}={key}; Path=/; HttpOnly; Max-Age=43200");
            (
                AppendHeaders([(header::SET_COOKIE, cookie)]),
                Redirect::to("/internal/intake"),
            )
                .into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
