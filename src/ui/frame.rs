//! Frame edge renderer (bracket style).
//!
//! Draws the structural lines of a framed output block:
//!
//! ```text
//! ┏━━ Open
//! ┃ body
//! ┣━━ Divider
//! ┃ body
//! ┗━━ Close  3.2s
//! ```
//!
//! Every entry point returns the finished line as a `String` ending in a
//! newline. Nothing is written to the terminal here.
//!
//! # Rendering strategies
//!
//! ```text
//! interactive: hide cursor → \r → color → CHA(prefix) → preamble+suffix → reset → show cursor → \n
//! limited:     color → preamble → color → suffix → reset → \n
//! ```
//!
//! The interactive strategy jumps to the last column of the enclosing frame
//! prefix and overwrites its trailing space. CI log viewers render colors but
//! mangle column jumps, so capability-limited terminals get the plain
//! sequential form instead.

use tracing::debug;
use unicode_width::UnicodeWidthStr;

use crate::core::ansi;
use crate::core::capability::{CapabilitySource, TermFeatures};
use crate::core::color::{Color, ResolveColor};
use crate::core::error::Result;
use crate::core::markup::{color_tag, MarkupRenderer, TagMarkup};

pub const VERTICAL: char = '┃';
pub const HORIZONTAL: char = '━';
pub const DIVIDER: char = '┣';
pub const TOP_LEFT: char = '┏';
pub const BOTTOM_LEFT: char = '┗';

/// The bracket frame style
#[derive(Debug, Clone, Copy, Default)]
pub struct Bracket;

impl Bracket {
    pub const NAME: &'static str = "bracket";

    /// Line prefix used inside a bracket frame
    pub fn prefix() -> &'static str {
        "┃"
    }
}

/// Leading character of an edge line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeMarker {
    TopLeft,
    Divider,
    BottomLeft,
}

impl EdgeMarker {
    pub fn as_char(self) -> char {
        match self {
            EdgeMarker::TopLeft => TOP_LEFT,
            EdgeMarker::Divider => DIVIDER,
            EdgeMarker::BottomLeft => BOTTOM_LEFT,
        }
    }
}

/// Columns already occupied by enclosing frames on the current line
pub trait FrameNesting {
    fn prefix_width(&self) -> usize;
}

impl FrameNesting for usize {
    fn prefix_width(&self) -> usize {
        *self
    }
}

/// Display width of a nesting prefix such as `"┃ ┃ "`
pub fn prefix_width_of(prefix: &str) -> usize {
    UnicodeWidthStr::width(prefix)
}

/// Renders frame edges for one terminal
#[derive(Debug, Clone)]
pub struct EdgeRenderer<C = TermFeatures, N = usize, M = TagMarkup> {
    caps: C,
    nesting: N,
    markup: M,
}

impl EdgeRenderer {
    /// Renderer with a fixed capability snapshot and no enclosing frames
    pub fn new(features: TermFeatures) -> Self {
        Self {
            caps: features,
            nesting: 0,
            markup: TagMarkup,
        }
    }
}

impl<C, N, M> EdgeRenderer<C, N, M>
where
    C: CapabilitySource,
    N: FrameNesting,
    M: MarkupRenderer,
{
    pub fn with_parts(caps: C, nesting: N, markup: M) -> Self {
        Self { caps, nesting, markup }
    }

    pub fn with_nesting<N2: FrameNesting>(self, nesting: N2) -> EdgeRenderer<C, N2, M> {
        EdgeRenderer {
            caps: self.caps,
            nesting,
            markup: self.markup,
        }
    }

    pub fn with_markup<M2: MarkupRenderer>(self, markup: M2) -> EdgeRenderer<C, N, M2> {
        EdgeRenderer {
            caps: self.caps,
            nesting: self.nesting,
            markup,
        }
    }

    /// `┏━━ text`
    pub fn open(&self, text: &str, color: impl ResolveColor) -> Result<String> {
        self.edge(text, color, EdgeMarker::TopLeft, None)
    }

    /// `┣━━ text`
    pub fn divider(&self, text: &str, color: impl ResolveColor) -> Result<String> {
        self.edge(text, color, EdgeMarker::Divider, None)
    }

    /// `┗━━ text`, with optional trailing text
    pub fn close(
        &self,
        text: &str,
        color: impl ResolveColor,
        right_text: Option<&str>,
    ) -> Result<String> {
        self.edge(text, color, EdgeMarker::BottomLeft, right_text)
    }

    fn edge(
        &self,
        text: &str,
        color: impl ResolveColor,
        marker: EdgeMarker,
        right_text: Option<&str>,
    ) -> Result<String> {
        let color = color.resolve_color()?;

        let mut preamble = String::new();
        preamble.push_str(color.code);
        preamble.push(marker.as_char());
        preamble.push(HORIZONTAL);
        preamble.push(HORIZONTAL);

        if !text.is_empty() {
            preamble.push(' ');
            preamble.push_str(&self.markup.resolve_text(&color_tag(&color, text)));
            preamble.push(' ');
        }

        let mut suffix = String::new();
        if let Some(right_text) = right_text {
            suffix.push(' ');
            suffix.push_str(right_text);
            suffix.push(' ');
        }

        let mut out = String::new();

        if self.caps.is_capability_limited() {
            debug!(?marker, color = color.name, "rendering edge without cursor addressing");
            out.push_str(color.code);
            out.push_str(&preamble);
            out.push_str(color.code);
            out.push_str(&suffix);
            out.push_str(Color::RESET.code);
            out.push('\n');
            return Ok(out);
        }

        // Overwrite the final space of the enclosing prefix
        let preamble_start = self.nesting.prefix_width().saturating_sub(1);
        let preamble_start = u16::try_from(preamble_start).unwrap_or(u16::MAX);
        debug!(?marker, color = color.name, preamble_start, "rendering edge");

        out.push_str(&ansi::hide_cursor());
        // Back to column 1 in case ^C or stray output moved the cursor
        out.push('\r');
        out.push_str(color.code);
        preamble.push_str(color.code);
        preamble.push_str(&suffix);
        out.push_str(&ansi::print_at_x(preamble_start, &preamble));
        out.push_str(Color::RESET.code);
        out.push_str(&ansi::show_cursor());
        out.push('\n');

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::UiError;
    use crate::core::markup::PlainMarkup;

    const GREEN: &str = "\x1b[32m";
    const RED: &str = "\x1b[31m";
    const BLUE: &str = "\x1b[94m";
    const RESET: &str = "\x1b[0m";

    fn limited() -> EdgeRenderer {
        EdgeRenderer::new(TermFeatures::EMOJI)
    }

    fn interactive() -> EdgeRenderer {
        EdgeRenderer::new(TermFeatures::all())
    }

    #[test]
    fn test_open_limited() {
        let line = limited().open("Task", Color::GREEN).unwrap();
        let expected = format!(
            "{GREEN}{GREEN}┏━━ {GREEN}Task{RESET} {GREEN}{RESET}\n"
        );
        assert_eq!(line, expected);
        assert!(!ansi::contains_cursor_control(&line));
    }

    #[test]
    fn test_close_with_right_text_limited() {
        let line = limited().close("Task", "red", Some("3.2s")).unwrap();
        let expected = format!(
            "{RED}{RED}┗━━ {RED}Task{RESET} {RED} 3.2s {RESET}\n"
        );
        assert_eq!(line, expected);
    }

    #[test]
    fn test_divider_empty_text() {
        let line = limited().divider("", Color::BLUE).unwrap();
        assert_eq!(line, format!("{BLUE}{BLUE}┣━━{BLUE}{RESET}\n"));
    }

    #[test]
    fn test_open_interactive() {
        let line = interactive().open("Task", Color::GREEN).unwrap();
        let expected = format!(
            "\x1b[?25l\r{GREEN}\x1b[1G{GREEN}┏━━ {GREEN}Task{RESET} {GREEN}{RESET}\x1b[?25h\n"
        );
        assert_eq!(line, expected);
    }

    #[test]
    fn test_interactive_overwrites_last_prefix_column() {
        let renderer = interactive().with_nesting(prefix_width_of("┃ ┃ "));
        let line = renderer.close("", Color::RED, Some("1s")).unwrap();
        // width 4 -> zero-based column 3 -> CHA 4
        let expected = format!(
            "\x1b[?25l\r{RED}\x1b[4G{RED}┗━━{RED} 1s {RESET}\x1b[?25h\n"
        );
        assert_eq!(line, expected);
    }

    #[test]
    fn test_interactive_wraps_write_in_cursor_hide_show() {
        for width in [0usize, 1, 2, 8] {
            let renderer = interactive().with_nesting(width);
            for line in [
                renderer.open("a", "green").unwrap(),
                renderer.divider("b", "yellow").unwrap(),
                renderer.close("c", "red", Some("r")).unwrap(),
            ] {
                let hide = line.find("\x1b[?25l").unwrap();
                let show = line.find("\x1b[?25h").unwrap();
                let jump = line.find(&ansi::cursor_to_column(width.saturating_sub(1) as u16)).unwrap();
                assert!(hide < jump && jump < show);
                assert!(line.ends_with('\n'));
            }
        }
    }

    #[test]
    fn test_limited_never_moves_cursor() {
        let renderer = limited().with_nesting(6);
        for line in [
            renderer.open("a", "green").unwrap(),
            renderer.divider("", "blue").unwrap(),
            renderer.close("c", "red", Some("9.9s")).unwrap(),
        ] {
            assert!(!ansi::contains_cursor_control(&line), "{:?}", line);
            assert!(line.ends_with(&format!("{RESET}\n")));
        }
    }

    #[test]
    fn test_unknown_color_fails() {
        assert_eq!(
            interactive().open("x", "puce"),
            Err(UiError::UnknownColor("puce".to_string()))
        );
        assert!(limited().close("x", "", None).is_err());
    }

    #[test]
    fn test_plain_markup_label() {
        let renderer = limited().with_markup(PlainMarkup);
        let line = renderer.open("Build", "green").unwrap();
        assert_eq!(line, format!("{GREEN}{GREEN}┏━━ Build {GREEN}{RESET}\n"));
    }

    #[test]
    fn test_live_capabilities() {
        use crate::core::capability::LiveCapabilities;

        let renderer = EdgeRenderer::with_parts(LiveCapabilities, 0usize, TagMarkup);
        let line = renderer.open("Live", Color::MAGENTA).unwrap();
        assert!(line.contains("┏━━ "));
        assert!(line.ends_with(&format!("{RESET}\n")) || line.ends_with("\x1b[?25h\n"));
    }

    #[test]
    fn test_prefix_width_of() {
        assert_eq!(prefix_width_of(""), 0);
        assert_eq!(prefix_width_of("┃ "), 2);
        assert_eq!(prefix_width_of(&format!("{} {} ", Bracket::prefix(), VERTICAL)), 4);
    }

    #[test]
    fn test_markers() {
        assert_eq!(EdgeMarker::TopLeft.as_char(), '┏');
        assert_eq!(EdgeMarker::Divider.as_char(), '┣');
        assert_eq!(EdgeMarker::BottomLeft.as_char(), '┗');
        assert_eq!(Bracket::NAME, "bracket");
    }
}
