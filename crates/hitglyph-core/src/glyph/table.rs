//! Fixed sprite-sheet layout.
//!
//! Digits `1`..`9` fill a 3-column grid over the first three rows; the fourth
//! row holds `,`, `0` and `.`. Changing the atlas file without this table is a
//! startup error, not a runtime one.

/// Glyph cell width in pixels.
pub const GLYPH_WIDTH: u32 = 100;
/// Glyph cell height in pixels.
pub const GLYPH_HEIGHT: u32 = 100;

/// Character -> top-left pixel offset of its cell in the atlas.
pub const GLYPH_TABLE: [(char, (u32, u32)); 12] = [
    ('1', (0, 0)),
    ('2', (100, 0)),
    ('3', (200, 0)),
    ('4', (0, 100)),
    ('5', (100, 100)),
    ('6', (200, 100)),
    ('7', (0, 200)),
    ('8', (100, 200)),
    ('9', (200, 200)),
    (',', (0, 300)),
    ('0', (100, 300)),
    ('.', (200, 300)),
];
