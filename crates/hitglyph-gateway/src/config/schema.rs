use std::net::SocketAddr;

use hitglyph_core::error::{HitGlyphError, Result};
use serde::Deserialize;

use crate::ops;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HitGlyphConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub atlas: AtlasSection,
}

impl HitGlyphConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(HitGlyphError::UnsupportedVersion);
        }

        self.server.validate()?;
        self.atlas.validate()?;

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Requests whose path starts with this are counted.
    #[serde(default = "default_counter_prefix")]
    pub counter_prefix: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            counter_prefix: default_counter_prefix(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;

        if !self.counter_prefix.starts_with('/') {
            return Err(HitGlyphError::BadRequest(
                "server.counter_prefix must start with '/'".into(),
            ));
        }
        // ops routes are matched first and would shadow the counter
        for route in ops::ROUTES {
            if route.starts_with(&self.counter_prefix) {
                return Err(HitGlyphError::BadRequest(format!(
                    "server.counter_prefix {} overlaps operational route {route}",
                    self.counter_prefix
                )));
            }
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|_| {
            HitGlyphError::BadRequest(format!(
                "server.listen must be a valid SocketAddr: {}",
                self.listen
            ))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_counter_prefix() -> String {
    "/counter".into()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AtlasSection {
    #[serde(default = "default_atlas_path")]
    pub path: String,
}

impl Default for AtlasSection {
    fn default() -> Self {
        Self {
            path: default_atlas_path(),
        }
    }
}

impl AtlasSection {
    pub fn validate(&self) -> Result<()> {
        if self.path.trim().is_empty() {
            return Err(HitGlyphError::BadRequest("atlas.path must not be empty".into()));
        }
        Ok(())
    }
}

fn default_atlas_path() -> String {
    "numbers.png".into()
}
