//! Glyph atlas loader.
//!
//! Decodes the sprite sheet once and copies every table cell into its own
//! bitmap. The decoded atlas is dropped before `load` returns; glyphs never
//! alias it.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::AtlasError;
use crate::raster::{Bitmap, PngCodec, Raster, RasterCodec, Rect};

use super::table::{GLYPH_HEIGHT, GLYPH_TABLE, GLYPH_WIDTH};

/// Immutable character -> glyph mapping. Safe to share across threads for reads.
#[derive(Debug, Clone)]
pub struct GlyphSet<R = Bitmap> {
    glyphs: HashMap<char, R>,
    glyph_width: u32,
    glyph_height: u32,
}

impl GlyphSet<Bitmap> {
    /// Load from PNG bytes.
    pub fn load(bytes: &[u8]) -> Result<Self, AtlasError> {
        Self::load_with(&PngCodec, bytes)
    }

    /// Read and load a PNG atlas from disk.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, AtlasError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| AtlasError::Missing {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::load(&bytes)
    }
}

impl<R: Raster> GlyphSet<R> {
    /// Load through an arbitrary codec.
    pub fn load_with<C>(codec: &C, bytes: &[u8]) -> Result<Self, AtlasError>
    where
        C: RasterCodec<Raster = R>,
    {
        let atlas = codec.decode(bytes)?;
        let (aw, ah) = (atlas.width(), atlas.height());

        let out_of_bounds = |ch, x, y| AtlasError::OutOfBounds {
            ch,
            x,
            y,
            atlas_width: aw,
            atlas_height: ah,
        };

        // Validate the whole table first so a mismatch never yields a partial set.
        for &(ch, (x, y)) in GLYPH_TABLE.iter() {
            if !Rect::new(x, y, GLYPH_WIDTH, GLYPH_HEIGHT).fits_within(aw, ah) {
                return Err(out_of_bounds(ch, x, y));
            }
        }

        let mut glyphs = HashMap::with_capacity(GLYPH_TABLE.len());
        for &(ch, (x, y)) in GLYPH_TABLE.iter() {
            let mut glyph = R::blank(GLYPH_WIDTH, GLYPH_HEIGHT);
            if !glyph.copy_rect(&atlas, Rect::new(x, y, GLYPH_WIDTH, GLYPH_HEIGHT), 0, 0) {
                return Err(out_of_bounds(ch, x, y));
            }
            glyphs.insert(ch, glyph);
        }

        tracing::debug!(
            atlas_width = aw,
            atlas_height = ah,
            glyphs = glyphs.len(),
            "glyph atlas loaded"
        );

        Ok(Self {
            glyphs,
            glyph_width: GLYPH_WIDTH,
            glyph_height: GLYPH_HEIGHT,
        })
    }

    pub fn get(&self, c: char) -> Option<&R> {
        self.glyphs.get(&c)
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn glyph_width(&self) -> u32 {
        self.glyph_width
    }

    pub fn glyph_height(&self) -> u32 {
        self.glyph_height
    }
}
