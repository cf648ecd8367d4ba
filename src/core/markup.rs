//! Color-tag resolution for frame labels.
//!
//! The frame renderer wraps labels in a single `{{color:text}}` tag and hands
//! the result to a [`MarkupRenderer`]. Full markup parsing (nested tags,
//! styles) belongs to the host application; the renderers here only resolve
//! one enclosing tag.

use super::color::{Color, ResolveColor};

pub trait MarkupRenderer {
    fn resolve_text(&self, markup: &str) -> String;
}

/// Build `{{name:text}}`
pub fn color_tag(color: &Color, text: &str) -> String {
    format!("{{{{{}:{}}}}}", color.name, text)
}

/// Split `{{name:text}}` into `(name, text)`
fn split_tag(markup: &str) -> Option<(&str, &str)> {
    let inner = markup.strip_prefix("{{")?.strip_suffix("}}")?;
    let (name, text) = inner.split_once(':')?;
    if name.is_empty() || name.contains(char::is_whitespace) {
        return None;
    }
    Some((name, text))
}

/// Resolves one enclosing color tag to `code + text + reset`
#[derive(Debug, Clone, Copy, Default)]
pub struct TagMarkup;

impl MarkupRenderer for TagMarkup {
    fn resolve_text(&self, markup: &str) -> String {
        match split_tag(markup) {
            Some((name, text)) => match name.resolve_color() {
                Ok(color) => format!("{}{}{}", color.code, text, Color::RESET.code),
                Err(_) => markup.to_string(),
            },
            None => markup.to_string(),
        }
    }
}

/// Strips the enclosing tag without adding color
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainMarkup;

impl MarkupRenderer for PlainMarkup {
    fn resolve_text(&self, markup: &str) -> String {
        match split_tag(markup) {
            Some((_, text)) => text.to_string(),
            None => markup.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_tag() {
        assert_eq!(color_tag(&Color::GREEN, "Task"), "{{green:Task}}");
    }

    #[test]
    fn test_tag_markup() {
        let m = TagMarkup;
        assert_eq!(m.resolve_text("{{green:Task}}"), "\x1b[32mTask\x1b[0m");
        // Label text may itself contain a colon
        assert_eq!(m.resolve_text("{{red:a:b}}"), "\x1b[31ma:b\x1b[0m");
        assert_eq!(m.resolve_text("no tags"), "no tags");
        assert_eq!(m.resolve_text("{{nocolor:x}}"), "{{nocolor:x}}");
    }

    #[test]
    fn test_plain_markup() {
        let m = PlainMarkup;
        assert_eq!(m.resolve_text("{{blue:Build}}"), "Build");
        assert_eq!(m.resolve_text("{{ :x}}"), "{{ :x}}");
    }
}
