//! Glyph registry - named, colorized status icons.
//!
//! A [`Glyph`] has a Unicode form and a plain fallback. Which one is shown is
//! decided on every access from the caller's emoji capability, never cached
//! on the glyph itself.
//!
//! # Standard glyphs
//!
//! | Handle | Glyph | Fallback | Color |
//! |--------|-------|----------|-------|
//! | `*` | ⭑ | `*` | yellow |
//! | `i` | 𝒾 | `i` | blue |
//! | `?` | ? | `?` | blue |
//! | `v` | ✓ | `√` | green |
//! | `x` | ✗ | `X` | red |
//! | `b` | 🐛 | `!` | white |
//! | `>` | » | `»` | yellow |
//! | `H` | ⌛︎ | `H` | blue |
//! | `!` | ⚠️ | `!` | yellow |

use std::sync::OnceLock;

use tracing::debug;

use super::capability::CapabilitySource;
use super::color::Color;
use super::error::{Result, UiError};

pub const STAR: &str = "*";
pub const INFO: &str = "i";
pub const QUESTION: &str = "?";
pub const CHECK: &str = "v";
pub const X: &str = "x";
pub const BUG: &str = "b";
pub const CHEVRON: &str = ">";
pub const HOURGLASS: &str = "H";
pub const WARNING: &str = "!";

/// A named icon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    handle: String,
    codepoints: Vec<char>,
    plain: String,
    color: Color,
}

impl Glyph {
    pub fn new(handle: &str, codepoints: &[char], plain: &str, color: Color) -> Self {
        Self {
            handle: handle.to_string(),
            codepoints: codepoints.to_vec(),
            plain: plain.to_string(),
            color,
        }
    }

    pub fn handle(&self) -> &str {
        &self.handle
    }

    pub fn codepoints(&self) -> &[char] {
        &self.codepoints
    }

    pub fn plain(&self) -> &str {
        &self.plain
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// The Unicode form, regardless of capability
    pub fn unicode(&self) -> String {
        self.codepoints.iter().collect()
    }

    /// Characters to display given emoji support
    pub fn display_char(&self, emoji: bool) -> String {
        if emoji {
            self.unicode()
        } else {
            self.plain.clone()
        }
    }

    /// Colored form: `code + char + reset`
    pub fn to_ansi(&self, emoji: bool) -> String {
        format!("{}{}{}", self.color.code, self.display_char(emoji), Color::RESET.code)
    }

    /// Tagged form for a markup renderer: `{{color:char}}`
    pub fn markup(&self, emoji: bool) -> String {
        format!("{{{{{}:{}}}}}", self.color.name, self.display_char(emoji))
    }

    /// Display characters according to `caps`
    pub fn char_for(&self, caps: &impl CapabilitySource) -> String {
        self.display_char(caps.supports_emoji())
    }

    /// Colored form according to `caps`
    pub fn render(&self, caps: &impl CapabilitySource) -> String {
        self.to_ansi(caps.supports_emoji())
    }
}

/// Ordered, append-only set of glyphs keyed by handle
#[derive(Debug, Clone, Default)]
pub struct GlyphRegistry {
    glyphs: Vec<Glyph>,
}

impl GlyphRegistry {
    /// An empty registry
    pub fn new() -> Self {
        Self { glyphs: Vec::new() }
    }

    /// A registry holding the standard glyph set
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        let defaults: [(&str, &[char], &str, Color); 9] = [
            (STAR, &['\u{2b51}'], "*", Color::YELLOW),
            (INFO, &['\u{1d4be}'], "i", Color::BLUE),
            (QUESTION, &['\u{003f}'], "?", Color::BLUE),
            (CHECK, &['\u{2713}'], "√", Color::GREEN),
            (X, &['\u{2717}'], "X", Color::RED),
            (BUG, &['\u{1f41b}'], "!", Color::WHITE),
            (CHEVRON, &['\u{00bb}'], "»", Color::YELLOW),
            // Variation selector 15 forces text presentation
            (HOURGLASS, &['\u{231b}', '\u{fe0e}'], "H", Color::BLUE),
            // Variation selector 16 forces emoji presentation
            (WARNING, &['\u{26a0}', '\u{fe0f}'], "!", Color::YELLOW),
        ];
        for (handle, codepoints, plain, color) in defaults {
            registry
                .register(handle, codepoints, plain, color)
                .expect("standard glyph handles are unique");
        }
        registry
    }

    /// Process-wide standard registry, built on first use
    pub fn standard() -> &'static GlyphRegistry {
        static STANDARD: OnceLock<GlyphRegistry> = OnceLock::new();
        STANDARD.get_or_init(GlyphRegistry::with_defaults)
    }

    /// Add a glyph. Handles must be unique.
    pub fn register(
        &mut self,
        handle: &str,
        codepoints: &[char],
        plain: &str,
        color: Color,
    ) -> Result<&Glyph> {
        if self.contains(handle) {
            return Err(UiError::DuplicateHandle(handle.to_string()));
        }
        debug!(handle, plain, color = color.name, "registering glyph");
        self.glyphs.push(Glyph::new(handle, codepoints, plain, color));
        self.lookup(handle)
    }

    /// Find a glyph by handle
    pub fn lookup(&self, handle: &str) -> Result<&Glyph> {
        self.glyphs
            .iter()
            .find(|g| g.handle == handle)
            .ok_or_else(|| UiError::UnknownGlyphHandle {
                handle: handle.to_string(),
                available: self.available().into_iter().map(str::to_string).collect(),
            })
    }

    pub fn contains(&self, handle: &str) -> bool {
        self.glyphs.iter().any(|g| g.handle == handle)
    }

    /// Registered handles, in registration order
    pub fn available(&self) -> Vec<&str> {
        self.glyphs.iter().map(|g| g.handle.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Glyph> {
        self.glyphs.iter()
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}
