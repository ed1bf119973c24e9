//! Sequence renderer tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use image::{imageops, RgbaImage};

use hitglyph_core::error::{ClientCode, HitGlyphError, RenderError};
use hitglyph_core::glyph::{hconcat, GLYPH_TABLE, MAX_SEQUENCE_LEN};
use hitglyph_core::raster::{PngCodec, Raster, RasterCodec, Rect};
use hitglyph_core::{render, render_png, GlyphSet};

use atlas_fixture::{atlas_image, atlas_png, cell_color};

fn glyphs() -> GlyphSet {
    GlyphSet::load(&atlas_png()).unwrap()
}

#[test]
fn single_char_equals_its_glyph() {
    let set = glyphs();
    for &(ch, _) in GLYPH_TABLE.iter() {
        let out = render(&ch.to_string(), &set).unwrap();
        assert_eq!(&out, set.get(ch).unwrap(), "glyph {ch}");
    }
}

#[test]
fn zero_matches_atlas_cell() {
    let atlas = atlas_image(300, 400);
    let cell = imageops::crop_imm(&atlas, 100, 300, 100, 100).to_image();
    let out = render("0", &glyphs()).unwrap();
    assert_eq!(out, cell);
}

#[test]
fn width_scales_with_length() {
    let out = render("1,234.5", &glyphs()).unwrap();
    assert_eq!(out.dimensions(), (700, 100));
    for (i, ch) in "1,234.5".chars().enumerate() {
        assert_eq!(*out.get_pixel(i as u32 * 100 + 5, 5), cell_color(ch), "slot {i}");
    }
}

#[test]
fn concatenation_composes() {
    let set = glyphs();
    for (a, b) in [("1", "2"), ("42", "0"), ("9.", ",87"), ("123", "4567890")] {
        let whole = render(&format!("{a}{b}"), &set).unwrap();
        let left = render(a, &set).unwrap();
        let right = render(b, &set).unwrap();
        let joined: RgbaImage = hconcat(&[&left, &right]).unwrap();
        assert_eq!(whole, joined, "{a}+{b}");
    }
}

#[test]
fn render_is_deterministic() {
    let set = glyphs();
    let a = render_png("31337", &set).unwrap();
    let b = render_png("31337", &set).unwrap();
    assert_eq!(a, b);
}

#[test]
fn png_roundtrip_keeps_pixels() {
    let set = glyphs();
    let png = render_png("808", &set).unwrap();
    assert!(png.starts_with(b"\x89PNG"));
    let decoded = PngCodec.decode(&png).unwrap();
    assert_eq!(decoded, render("808", &set).unwrap());
}

#[test]
fn empty_sequence_rejected() {
    assert_eq!(render("", &glyphs()).unwrap_err(), RenderError::EmptySequence);
}

#[test]
fn unsupported_char_reports_position() {
    let err = render("1a2", &glyphs()).unwrap_err();
    assert_eq!(err, RenderError::UnsupportedCharacter { ch: 'a', position: 1 });
}

#[test]
fn position_counts_chars_not_bytes() {
    let err = render("1é2x", &glyphs()).unwrap_err();
    assert_eq!(err, RenderError::UnsupportedCharacter { ch: 'é', position: 1 });
}

#[test]
fn render_png_maps_error_codes() {
    let set = glyphs();
    let e: HitGlyphError = render_png("-1", &set).unwrap_err();
    assert_eq!(e.client_code(), ClientCode::UnsupportedCharacter);
    assert!(e.is_client_error());

    let e = render_png("", &set).unwrap_err();
    assert_eq!(e.client_code().as_str(), "EMPTY_SEQUENCE");
}

#[test]
fn failed_render_leaves_set_intact() {
    let set = glyphs();
    let before = set.get('7').unwrap().clone();
    let _ = render("7z", &set);
    assert_eq!(set.get('7').unwrap(), &before);
    assert_eq!(set.len(), 12);
}

#[test]
fn longest_accepted_sequence_renders() {
    let out = render(&"9".repeat(MAX_SEQUENCE_LEN), &glyphs()).unwrap();
    assert_eq!(out.dimensions(), (MAX_SEQUENCE_LEN as u32 * 100, 100));
}

#[test]
fn overlong_sequence_is_rejected() {
    let set = glyphs();
    let err = render(&"1".repeat(MAX_SEQUENCE_LEN + 1), &set).unwrap_err();
    assert_eq!(
        err,
        RenderError::TooLong { len: MAX_SEQUENCE_LEN + 1, max: MAX_SEQUENCE_LEN }
    );

    // width would overflow u32 if this were ever allocated
    let err = render(&"1".repeat(42_949_673), &set).unwrap_err();
    assert!(matches!(err, RenderError::TooLong { len: 42_949_673, .. }), "{err:?}");

    let e = render_png(&"2".repeat(10_000), &set).unwrap_err();
    assert_eq!(e.client_code(), ClientCode::SequenceTooLong);
    assert!(e.is_client_error());
}

/// Size-only raster, lets width arithmetic be checked without allocating.
struct Strip {
    width: u32,
    height: u32,
}

impl Raster for Strip {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn blank(width: u32, height: u32) -> Self {
        Strip { width, height }
    }

    fn copy_rect(&mut self, src: &Self, src_rect: Rect, dst_x: u32, dst_y: u32) -> bool {
        src_rect.fits_within(src.width, src.height)
            && Rect::new(dst_x, dst_y, src_rect.width, src_rect.height)
                .fits_within(self.width, self.height)
    }
}

#[test]
fn hconcat_refuses_width_overflow() {
    let wide = Strip { width: u32::MAX / 2 + 1, height: 100 };
    assert!(hconcat(&[&wide, &wide]).is_none());

    let narrow = Strip { width: 100, height: 40 };
    let out = hconcat(&[&wide, &narrow]).unwrap();
    assert_eq!((out.width, out.height), (u32::MAX / 2 + 101, 100));
}
