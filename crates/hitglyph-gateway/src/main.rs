//! hitglyph gateway
//!
//! - Counter endpoint: GET/DELETE under `server.counter_prefix`
//! - Atlas loaded before bind; a bad atlas stops the process
//! - `/healthz`, `/metrics`

use tracing_subscriber::{fmt, EnvFilter};

use hitglyph_core::error::{HitGlyphError, Result};
use hitglyph_gateway::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, code = e.client_code().as_str(), "hitglyph-gateway failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let path = std::env::var("HITGLYPH_CONFIG").unwrap_or_else(|_| config::DEFAULT_PATH.to_string());
    let cfg = config::load_from_file(&path)?;
    let listen = cfg.server.listen_addr()?;

    let state = app_state::AppState::bootstrap(cfg)?;
    let glyphs = state.glyphs().len();
    let app = router::build_router(state);

    tracing::info!(%listen, glyphs, "hitglyph-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| HitGlyphError::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| HitGlyphError::Internal(format!("server failed: {e}")))
}
