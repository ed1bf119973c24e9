//! Sequence renderer.
//!
//! Output width is the sum of glyph widths, height the tallest glyph. Glyphs
//! are copied opaquely at consecutive x offsets in input order.

use bytes::Bytes;

use crate::error::{HitGlyphError, RenderError};
use crate::raster::{Bitmap, PngCodec, Raster, RasterCodec, Rect};

use super::atlas::GlyphSet;

/// Longest sequence `render` accepts. Bounds the output allocation
/// (256 glyphs of 100x100 RGBA is 10 MB).
pub const MAX_SEQUENCE_LEN: usize = 256;

/// Compose `sequence` into one bitmap.
///
/// Every character is resolved before anything is allocated, so a failure
/// never produces partial output. `position` in
/// [`RenderError::UnsupportedCharacter`] counts characters, not bytes.
pub fn render<R: Raster>(sequence: &str, glyphs: &GlyphSet<R>) -> Result<R, RenderError> {
    if sequence.is_empty() {
        return Err(RenderError::EmptySequence);
    }
    let len = sequence.chars().count();
    if len > MAX_SEQUENCE_LEN {
        return Err(RenderError::TooLong {
            len,
            max: MAX_SEQUENCE_LEN,
        });
    }

    let parts = sequence
        .chars()
        .enumerate()
        .map(|(position, ch)| {
            glyphs
                .get(ch)
                .ok_or(RenderError::UnsupportedCharacter { ch, position })
        })
        .collect::<Result<Vec<&R>, _>>()?;

    hconcat(&parts).ok_or(RenderError::TooLong {
        len,
        max: MAX_SEQUENCE_LEN,
    })
}

/// Render and encode as PNG.
pub fn render_png(sequence: &str, glyphs: &GlyphSet<Bitmap>) -> crate::Result<Bytes> {
    let bitmap = render(sequence, glyphs)?;
    PngCodec.encode(&bitmap).map_err(HitGlyphError::from)
}

/// Place bitmaps side by side, left to right, top-aligned.
///
/// `None` when the combined width does not fit in `u32`.
pub fn hconcat<R: Raster>(parts: &[&R]) -> Option<R> {
    let width = parts
        .iter()
        .try_fold(0u32, |acc, p| acc.checked_add(p.width()))?;
    let height = parts.iter().map(|p| p.height()).max().unwrap_or(0);

    let mut out = R::blank(width, height);
    let mut x = 0;
    for part in parts {
        let copied = out.copy_rect(part, Rect::new(0, 0, part.width(), part.height()), x, 0);
        debug_assert!(copied, "hconcat sized the output to fit every part");
        x += part.width();
    }
    Some(out)
}
