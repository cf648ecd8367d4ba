//! Named ANSI colors.
//!
//! A [`Color`] pairs an SGR escape sequence with the symbolic name used in
//! color tags such as `{{green:done}}`. Colors are plain constant data and are
//! shared by copy.

use super::error::{Result, UiError};

/// ANSI color (escape code + symbolic name)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Full escape sequence, e.g. `"\x1b[32m"`
    pub code: &'static str,
    /// Symbolic name, e.g. `"green"`
    pub name: &'static str,
}

impl Color {
    pub const fn new(code: &'static str, name: &'static str) -> Self {
        Self { code, name }
    }

    pub const RED: Color = Color::new("\x1b[31m", "red");
    pub const GREEN: Color = Color::new("\x1b[32m", "green");
    pub const YELLOW: Color = Color::new("\x1b[33m", "yellow");
    // Bright blue (94), not 34
    pub const BLUE: Color = Color::new("\x1b[94m", "blue");
    pub const MAGENTA: Color = Color::new("\x1b[35m", "magenta");
    pub const CYAN: Color = Color::new("\x1b[36m", "cyan");
    pub const RESET: Color = Color::new("\x1b[0m", "reset");
    pub const BOLD: Color = Color::new("\x1b[1m", "bold");
    pub const WHITE: Color = Color::new("\x1b[97m", "white");
    pub const GRAY: Color = Color::new("\x1b[38;5;244m", "gray");
    pub const ORANGE: Color = Color::new("\x1b[38;5;214m", "orange");

    /// All named colors, in lookup order
    pub const ALL: [Color; 11] = [
        Color::RED,
        Color::GREEN,
        Color::YELLOW,
        Color::BLUE,
        Color::MAGENTA,
        Color::CYAN,
        Color::RESET,
        Color::BOLD,
        Color::WHITE,
        Color::GRAY,
        Color::ORANGE,
    ];

    /// Find a color by symbolic name (case-insensitive)
    pub fn by_name(name: &str) -> Option<Color> {
        let name = name.trim().to_lowercase();
        Self::ALL.iter().copied().find(|c| c.name == name)
    }

    /// List available color names
    pub fn list() -> Vec<&'static str> {
        Self::ALL.iter().map(|c| c.name).collect()
    }
}

/// Anything a caller may pass where a color is expected.
///
/// Identifiers are looked up by name; a [`Color`] resolves to itself.
pub trait ResolveColor {
    fn resolve_color(&self) -> Result<Color>;
}

impl ResolveColor for Color {
    fn resolve_color(&self) -> Result<Color> {
        Ok(*self)
    }
}

impl ResolveColor for &Color {
    fn resolve_color(&self) -> Result<Color> {
        Ok(**self)
    }
}

impl ResolveColor for str {
    fn resolve_color(&self) -> Result<Color> {
        resolve_color(self)
    }
}

impl ResolveColor for &str {
    fn resolve_color(&self) -> Result<Color> {
        resolve_color(self)
    }
}

impl ResolveColor for String {
    fn resolve_color(&self) -> Result<Color> {
        resolve_color(self)
    }
}

/// Resolve a color identifier, failing on anything unknown.
pub fn resolve_color(name: &str) -> Result<Color> {
    Color::by_name(name).ok_or_else(|| UiError::UnknownColor(name.to_string()))
}
