//! Shared application state for the hitglyph gateway.
//!
//! The glyph set is loaded once before the state exists; a state value is
//! therefore always "ready". Startup errors are returned, never panicked.

use std::sync::Arc;

use hitglyph_core::error::Result;
use hitglyph_core::GlyphSet;

use crate::config::HitGlyphConfig;
use crate::counter::{CounterStore, ShardedCounterStore};
use crate::obs::GatewayMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    counters: Arc<dyn CounterStore>,
    metrics: Arc<GatewayMetrics>,
}

struct AppStateInner {
    cfg: HitGlyphConfig,
    glyphs: GlyphSet,
}

impl AppState {
    /// Load the atlas named in `cfg` and build state with an in-memory store.
    /// Fails fast when the atlas is missing, unreadable, or mismatched.
    pub fn bootstrap(cfg: HitGlyphConfig) -> Result<Self> {
        let glyphs = GlyphSet::load_from_path(&cfg.atlas.path)?;
        tracing::info!(path = %cfg.atlas.path, glyphs = glyphs.len(), "glyph atlas ready");
        Ok(Self::new(cfg, glyphs))
    }

    pub fn new(cfg: HitGlyphConfig, glyphs: GlyphSet) -> Self {
        Self::with_store(cfg, glyphs, Arc::new(ShardedCounterStore::new()))
    }

    pub fn with_store(
        cfg: HitGlyphConfig,
        glyphs: GlyphSet,
        counters: Arc<dyn CounterStore>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner { cfg, glyphs }),
            counters,
            metrics: Arc::new(GatewayMetrics::default()),
        }
    }

    pub fn cfg(&self) -> &HitGlyphConfig {
        &self.inner.cfg
    }

    pub fn glyphs(&self) -> &GlyphSet {
        &self.inner.glyphs
    }

    pub fn counters(&self) -> &dyn CounterStore {
        self.counters.as_ref()
    }

    pub fn metrics(&self) -> &GatewayMetrics {
        &self.metrics
    }
}
