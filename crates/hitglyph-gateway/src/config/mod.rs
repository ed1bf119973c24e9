//! Gateway config loader (strict parsing).

pub mod schema;

use std::fs;

use hitglyph_core::error::{HitGlyphError, Result};

pub use schema::{AtlasSection, HitGlyphConfig, ServerSection};

/// Config file read when `HITGLYPH_CONFIG` is not set.
pub const DEFAULT_PATH: &str = "hitglyph.yaml";

pub fn load_from_file(path: &str) -> Result<HitGlyphConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| HitGlyphError::Internal(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<HitGlyphConfig> {
    let cfg: HitGlyphConfig = serde_yaml::from_str(s)
        .map_err(|e| HitGlyphError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
