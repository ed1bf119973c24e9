//! hitglyph core: glyph atlas loading and sequence rendering.
//!
//! This crate turns a fixed sprite sheet into a set of character glyphs and
//! composes them into one bitmap per requested character sequence. It carries
//! no transport or runtime dependencies; counting and serving live in the
//! gateway.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths surface as `HitGlyphError`/`Result` so a bad request
//! never takes the serving process down.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod glyph;
pub mod raster;

/// Shared result type.
pub use error::{HitGlyphError, Result};
pub use glyph::{render, render_png, GlyphSet};
