//! Top-level facade crate for hitglyph.
//!
//! Re-exports the rendering core and the gateway library so users can depend on a single crate.

pub mod core {
    pub use hitglyph_core::*;
}

pub mod gateway {
    pub use hitglyph_gateway::*;
}
