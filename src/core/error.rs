//! Error types shared by the glyph registry and the frame renderer.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UiError {
    #[error("invalid glyph handle: {handle} -- must be one of available ({})", .available.join(","))]
    UnknownGlyphHandle {
        handle: String,
        available: Vec<String>,
    },

    #[error("glyph handle already registered: {0}")]
    DuplicateHandle(String),

    #[error("invalid color: {0}")]
    UnknownColor(String),
}

pub type Result<T> = std::result::Result<T, UiError>;
