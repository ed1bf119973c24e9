//! Shared error types across hitglyph crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed config.
    BadRequest,
    /// Sequence contains a character with no glyph.
    UnsupportedCharacter,
    /// Nothing to render.
    EmptySequence,
    /// Sequence longer than the renderer accepts.
    SequenceTooLong,
    /// Glyph atlas could not be loaded.
    AtlasUnavailable,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in response bodies.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::UnsupportedCharacter => "UNSUPPORTED_CHARACTER",
            ClientCode::EmptySequence => "EMPTY_SEQUENCE",
            ClientCode::SequenceTooLong => "SEQUENCE_TOO_LONG",
            ClientCode::AtlasUnavailable => "ATLAS_UNAVAILABLE",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Failures while turning the atlas resource into a glyph set. All fatal at startup.
#[derive(Debug, Error)]
pub enum AtlasError {
    #[error("atlas missing ({path}): {reason}")]
    Missing { path: String, reason: String },
    #[error("atlas unreadable: {0}")]
    Unreadable(String),
    #[error(
        "glyph '{ch}' at ({x},{y}) exceeds atlas bounds {atlas_width}x{atlas_height}"
    )]
    OutOfBounds {
        ch: char,
        x: u32,
        y: u32,
        atlas_width: u32,
        atlas_height: u32,
    },
}

/// Per-request rendering failures. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("empty sequence")]
    EmptySequence,
    #[error("unsupported character {ch:?} at position {position}")]
    UnsupportedCharacter { ch: char, position: usize },
    #[error("sequence of {len} characters exceeds the limit of {max}")]
    TooLong { len: usize, max: usize },
}

/// Bitmap could not be serialized.
#[derive(Debug, Error)]
#[error("encode failed: {0}")]
pub struct EncodeError(pub String);

/// Shared result type.
pub type Result<T> = std::result::Result<T, HitGlyphError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum HitGlyphError {
    #[error(transparent)]
    Atlas(#[from] AtlasError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Encode(#[from] EncodeError),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl HitGlyphError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            HitGlyphError::Atlas(_) => ClientCode::AtlasUnavailable,
            HitGlyphError::Render(RenderError::EmptySequence) => ClientCode::EmptySequence,
            HitGlyphError::Render(RenderError::UnsupportedCharacter { .. }) => {
                ClientCode::UnsupportedCharacter
            }
            HitGlyphError::Render(RenderError::TooLong { .. }) => ClientCode::SequenceTooLong,
            HitGlyphError::Encode(_) => ClientCode::Internal,
            HitGlyphError::BadRequest(_) => ClientCode::BadRequest,
            HitGlyphError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            HitGlyphError::Internal(_) => ClientCode::Internal,
        }
    }

    /// Whether the failure is the caller's fault (the request can be rejected and serving continues).
    pub fn is_client_error(&self) -> bool {
        matches!(self, HitGlyphError::Render(_) | HitGlyphError::BadRequest(_))
    }
}
