//! Axum router wiring.
//!
//! Ops routes are matched first; everything else falls through to the
//! counter handler, which decides by path prefix.

use axum::{routing::get, Router};

use crate::{app_state::AppState, ops, transport};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(ops::HEALTHZ, get(ops::healthz))
        .route(ops::METRICS, get(ops::metrics))
        .fallback(transport::http::handle)
        .with_state(state)
}
