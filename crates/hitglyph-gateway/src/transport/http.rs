//! Counter endpoint.
//!
//! Every request not claimed by an ops route lands here:
//! - path under the counter prefix, `GET`: increment, render, return PNG
//! - path under the counter prefix, `DELETE`: forget the counter
//! - anything else: `200` with an empty body, nothing touched

use std::time::Instant;

use axum::{
    extract::State,
    http::{header, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};

use hitglyph_core::error::HitGlyphError;
use hitglyph_core::render_png;

use crate::app_state::AppState;

/// Counter identity: path plus query string, as requested.
pub fn counter_key(uri: &Uri) -> &str {
    uri.path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path())
}

pub async fn handle(State(app): State<AppState>, method: Method, uri: Uri) -> Response {
    if !uri.path().starts_with(app.cfg().server.counter_prefix.as_str()) {
        return ignored(&app, &method, &uri);
    }

    let key = counter_key(&uri);
    match method {
        Method::GET => hit(&app, key),
        Method::DELETE => {
            let existed = app.counters().reset(key);
            tracing::debug!(method = "DELETE", key, existed, "counter reset");
            app.metrics()
                .requests
                .inc(&[("method", "DELETE"), ("outcome", "reset")]);
            StatusCode::OK.into_response()
        }
        _ => ignored(&app, &method, &uri),
    }
}

fn hit(app: &AppState, key: &str) -> Response {
    let count = app.counters().increment(key);

    let started = Instant::now();
    let rendered = render_png(&count.to_string(), app.glyphs());
    app.metrics()
        .render_duration
        .observe(&[], started.elapsed());

    match rendered {
        Ok(png) => {
            tracing::debug!(method = "GET", key, count, bytes = png.len(), "counter rendered");
            app.metrics()
                .requests
                .inc(&[("method", "GET"), ("outcome", "rendered")]);
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "image/png"),
                    (header::CACHE_CONTROL, "no-cache"),
                ],
                png,
            )
                .into_response()
        }
        Err(e) => {
            tracing::warn!(method = "GET", key, count, error = %e, "counter render failed");
            app.metrics()
                .requests
                .inc(&[("method", "GET"), ("outcome", "error")]);
            error_response(&e)
        }
    }
}

fn ignored(app: &AppState, method: &Method, uri: &Uri) -> Response {
    tracing::debug!(method = %method, path = uri.path(), "request ignored");
    app.metrics()
        .requests
        .inc(&[("method", method_label(method)), ("outcome", "ignored")]);
    StatusCode::OK.into_response()
}

/// Metrics label for a request method. Extension methods collapse into
/// `other` so clients cannot mint new series.
pub fn method_label(method: &Method) -> &'static str {
    match *method {
        Method::GET => "GET",
        Method::HEAD => "HEAD",
        Method::POST => "POST",
        Method::PUT => "PUT",
        Method::DELETE => "DELETE",
        Method::PATCH => "PATCH",
        Method::OPTIONS => "OPTIONS",
        _ => "other",
    }
}

/// Map a request-level failure to a status and stable code body.
pub fn error_response(e: &HitGlyphError) -> Response {
    let status = if e.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (status, e.client_code().as_str()).into_response()
}
