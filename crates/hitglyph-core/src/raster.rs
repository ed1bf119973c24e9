//! Raster seam: the minimal 2D bitmap surface the glyph code is written against.
//!
//! The loader and renderer only ever decode, copy rectangles, and encode. The
//! codec behind those operations is swappable; the default is PNG/RGBA8 via
//! the `image` crate.

use std::io::Cursor;

use bytes::Bytes;
use image::{ImageFormat, RgbaImage};

use crate::error::{AtlasError, EncodeError};

/// Default bitmap: 8-bit RGBA, alpha preserved.
pub type Bitmap = RgbaImage;

/// Axis-aligned pixel rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// True when the rectangle lies fully inside a `width` x `height` surface.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        let right = self.x.checked_add(self.width);
        let bottom = self.y.checked_add(self.height);
        matches!((right, bottom), (Some(r), Some(b)) if r <= width && b <= height)
    }
}

/// A pixel-addressable bitmap that supports opaque rectangle copies.
pub trait Raster: Sized {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Fully transparent surface.
    fn blank(width: u32, height: u32) -> Self;

    /// Copy `src_rect` of `src` to `(dst_x, dst_y)` of `self`, replacing
    /// destination pixels. Returns `false` and leaves `self` untouched when
    /// either region falls outside its surface.
    fn copy_rect(&mut self, src: &Self, src_rect: Rect, dst_x: u32, dst_y: u32) -> bool;
}

impl Raster for RgbaImage {
    fn width(&self) -> u32 {
        self.width()
    }

    fn height(&self) -> u32 {
        self.height()
    }

    fn blank(width: u32, height: u32) -> Self {
        RgbaImage::new(width, height)
    }

    fn copy_rect(&mut self, src: &Self, src_rect: Rect, dst_x: u32, dst_y: u32) -> bool {
        let dst_rect = Rect::new(dst_x, dst_y, src_rect.width, src_rect.height);
        if !src_rect.fits_within(RgbaImage::width(src), RgbaImage::height(src))
            || !dst_rect.fits_within(RgbaImage::width(self), RgbaImage::height(self))
        {
            return false;
        }

        // 4 bytes per RGBA8 pixel, rows are contiguous
        let row_bytes = src_rect.width as usize * 4;
        let src_stride = RgbaImage::width(src) as usize * 4;
        let dst_stride = RgbaImage::width(self) as usize * 4;

        let src_raw: &[u8] = src;
        let dst_raw: &mut [u8] = self;

        for row in 0..src_rect.height as usize {
            let s = (src_rect.y as usize + row) * src_stride + src_rect.x as usize * 4;
            let d = (dst_y as usize + row) * dst_stride + dst_x as usize * 4;
            dst_raw[d..d + row_bytes].copy_from_slice(&src_raw[s..s + row_bytes]);
        }
        true
    }
}

/// Decode/encode between bytes and a [`Raster`].
pub trait RasterCodec {
    type Raster: Raster;

    fn decode(&self, bytes: &[u8]) -> Result<Self::Raster, AtlasError>;
    fn encode(&self, raster: &Self::Raster) -> Result<Bytes, EncodeError>;
}

/// Lossless PNG codec producing RGBA8 bitmaps.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngCodec;

impl RasterCodec for PngCodec {
    type Raster = Bitmap;

    fn decode(&self, bytes: &[u8]) -> Result<Bitmap, AtlasError> {
        let img = image::load_from_memory_with_format(bytes, ImageFormat::Png)
            .map_err(|e| AtlasError::Unreadable(e.to_string()))?;
        Ok(img.to_rgba8())
    }

    fn encode(&self, raster: &Bitmap) -> Result<Bytes, EncodeError> {
        let mut buf = Cursor::new(Vec::new());
        raster
            .write_to(&mut buf, ImageFormat::Png)
            .map_err(|e| EncodeError(e.to_string()))?;
        Ok(Bytes::from(buf.into_inner()))
    }
}
