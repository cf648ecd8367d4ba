//! Core rendering primitives.
//!
//! - **color**: named ANSI colors and the color resolver
//! - **ansi**: cursor control escape sequences (via crossterm)
//! - **capability**: terminal capability snapshot and detection signals
//! - **markup**: color-tag resolution for labels
//! - **glyph**: glyph registry with emoji/plain fallback
//! - **error**: shared error type
//!
//! # Dependencies
//!
//! ```text
//! glyph ──┬── color
//!         └── capability
//! markup ──── color
//! ```

pub mod ansi;
pub mod capability;
pub mod color;
pub mod error;
pub mod glyph;
pub mod markup;

pub use capability::{CapabilitySource, EmojiMode, LiveCapabilities, RenderMode, TermFeatures};
pub use color::{resolve_color, Color, ResolveColor};
pub use error::{Result, UiError};
pub use glyph::{Glyph, GlyphRegistry};
pub use markup::{MarkupRenderer, PlainMarkup, TagMarkup};
