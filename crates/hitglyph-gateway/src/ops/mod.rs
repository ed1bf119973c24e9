//! Operational HTTP endpoints.
//!
//! - `/healthz` : liveness
//! - `/metrics` : Prometheus text format

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::app_state::AppState;

pub const HEALTHZ: &str = "/healthz";
pub const METRICS: &str = "/metrics";

/// Routes registered ahead of the counter fallback.
pub const ROUTES: [&str; 2] = [HEALTHZ, METRICS];

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    let tracked = state.counters().len() as u64;
    let body = state.metrics().render(&[("hitglyph_tracked_keys", tracked)]);

    (
        StatusCode::OK,
        [(axum::http::header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        body,
    )
        .into_response()
}
