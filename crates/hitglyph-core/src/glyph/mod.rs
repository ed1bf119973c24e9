//! Glyph atlas slicing and sequence composition.
//!
//! - `table`: compile-time layout of the sprite sheet
//! - `atlas`: one-shot loader producing an immutable `GlyphSet`
//! - `render`: left-to-right concatenation of glyphs

pub mod atlas;
pub mod render;
pub mod table;

pub use atlas::GlyphSet;
pub use render::{hconcat, render, render_png, MAX_SEQUENCE_LEN};
pub use table::{GLYPH_HEIGHT, GLYPH_TABLE, GLYPH_WIDTH};
