//! frameline - framed CLI output demo
//!
//! Prints a sample frame and the glyph table using the detected (or forced)
//! terminal capabilities. Useful for checking how a terminal or CI log viewer
//! handles both rendering strategies.
//!
//! # Quick Start
//!
//! ```text
//! frameline                  # Detect capabilities from the environment
//! frameline --ci             # Force the capability-limited strategy
//! frameline --no-emoji       # Use plain glyph fallbacks
//! frameline --glyph v        # Print a single glyph
//! ```

use std::env;
use std::io::{self, Write};

use anyhow::Context;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use frameline::config::Config;
use frameline::core::{Color, EmojiMode, GlyphRegistry, RenderMode, TermFeatures};
use frameline::ui::{prefix_width_of, Bracket, EdgeRenderer};

/// Command line options
#[derive(Debug, Default)]
struct Options {
    mode: Option<RenderMode>,
    emoji: Option<EmojiMode>,
    prefix_width: Option<usize>,
    glyph: Option<String>,
}

/// Version string from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_version() {
    eprintln!("frameline {}", VERSION);
}

fn print_help() {
    eprintln!("frameline {} - Framed CLI output demo", VERSION);
    eprintln!();
    eprintln!("Usage: frameline [OPTIONS]");
    eprintln!();
    eprintln!("Rendering options:");
    eprintln!("  (default)             Detect from $CI and ~/.frameline/config.toml");
    eprintln!("  --ci                  Capability-limited output (no cursor movement)");
    eprintln!("  --interactive         Cursor-addressed output");
    eprintln!("  --emoji               Unicode glyphs");
    eprintln!("  --no-emoji            Plain glyph fallbacks");
    eprintln!("  --prefix-width <N>    Columns of enclosing frame prefix");
    eprintln!();
    eprintln!("Other options:");
    eprintln!("  -g, --glyph <H>       Print one glyph by handle");
    eprintln!("  -v, --version         Show version");
    eprintln!("  -h, --help            Show this help");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  CI                    Any non-empty value selects limited output");
    eprintln!("  FRAMELINE_LOG         Log filter (e.g. debug)");
}

/// Parse command line arguments
fn parse_args() -> Result<Option<Options>, String> {
    let args: Vec<String> = env::args().skip(1).collect();
    let mut options = Options::default();
    let mut i = 0;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                return Ok(None);
            }
            "-v" | "--version" => {
                print_version();
                return Ok(None);
            }
            "--ci" => options.mode = Some(RenderMode::Limited),
            "--interactive" => options.mode = Some(RenderMode::Interactive),
            "--emoji" => options.emoji = Some(EmojiMode::Always),
            "--no-emoji" => options.emoji = Some(EmojiMode::Never),
            "--prefix-width" => {
                i += 1;
                let value = args.get(i).ok_or("--prefix-width requires a value")?;
                let width = value
                    .parse()
                    .map_err(|_| format!("Invalid prefix width: {}", value))?;
                options.prefix_width = Some(width);
            }
            "-g" | "--glyph" => {
                i += 1;
                let handle = args.get(i).ok_or("--glyph requires a handle")?;
                options.glyph = Some(handle.clone());
            }
            other => return Err(format!("Unknown option: {}", other)),
        }
        i += 1;
    }

    Ok(Some(options))
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("FRAMELINE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn main() -> anyhow::Result<()> {
    let options = match parse_args() {
        Ok(Some(o)) => o,
        Ok(None) => return Ok(()),
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Use --help for usage information");
            std::process::exit(1);
        }
    };

    init_logging();

    let mut config = Config::load();
    if let Some(mode) = options.mode {
        config.terminal.mode = mode;
    }
    if let Some(emoji) = options.emoji {
        config.terminal.emoji = emoji;
    }
    if let Some(width) = options.prefix_width {
        config.terminal.prefix_width = width;
    }

    let features = config.features(TermFeatures::detect());
    info!(?features, "frameline starting");

    let glyphs = GlyphRegistry::standard();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(handle) = options.glyph {
        let glyph = glyphs.lookup(&handle)?;
        writeln!(out, "{}", glyph.render(&features))?;
        return Ok(());
    }

    run_demo(&mut out, &config, features, glyphs).context("failed to render demo")?;
    out.flush()?;
    Ok(())
}

/// Draw a sample frame listing every glyph
fn run_demo<W: Write>(
    out: &mut W,
    config: &Config,
    features: TermFeatures,
    glyphs: &GlyphRegistry,
) -> anyhow::Result<()> {
    let width = config.terminal.prefix_width;
    let outer = EdgeRenderer::new(features).with_nesting(width);
    // The outer edge overwrites the last prefix column, so the bar goes there too
    let indent = " ".repeat(width.saturating_sub(1));
    let line_prefix = format!(
        "{}{}{}{} ",
        indent,
        Color::CYAN.code,
        Bracket::prefix(),
        Color::RESET.code
    );
    debug!(prefix_width = width, "drawing demo frame");

    write!(out, "{}", outer.open("frameline", Color::CYAN)?)?;
    let mode = if features.is_capability_limited() {
        "capability-limited"
    } else {
        "interactive"
    };
    writeln!(out, "{}rendering: {}", line_prefix, mode)?;
    writeln!(out, "{}emoji: {}", line_prefix, features.supports_emoji())?;

    write!(out, "{}", outer.divider("Glyphs", Color::CYAN)?)?;
    for glyph in glyphs.iter() {
        writeln!(
            out,
            "{}{} {}  {}",
            line_prefix,
            glyph.render(&features),
            glyph.handle(),
            glyph.color().name
        )?;
    }

    // Nested frame: the outer prefix ends in a space that the inner edge overwrites
    let nested_width = prefix_width_of(&indent) + prefix_width_of("┃ ");
    let inner = EdgeRenderer::new(features).with_nesting(nested_width);
    write!(out, "{}{}", line_prefix, inner.open("Nested", Color::GREEN)?)?;
    writeln!(out, "{}{}{} ok", line_prefix, Color::GREEN.code, Bracket::prefix())?;
    write!(out, "{}{}", line_prefix, inner.close("", Color::GREEN, Some("0.1s"))?)?;

    write!(out, "{}", outer.close("", Color::CYAN, Some(VERSION))?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_output(prefix_width: usize, features: TermFeatures) -> String {
        let mut config = Config::default();
        config.terminal.prefix_width = prefix_width;
        let mut out = Vec::new();
        run_demo(&mut out, &config, features, GlyphRegistry::standard()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_body_bar_aligns_with_outer_edge() {
        let output = demo_output(0, TermFeatures::all());
        // Outer edges jump to column 0, body lines start with the bar
        assert!(output.starts_with("\x1b[?25l\r\x1b[36m\x1b[1G\x1b[36m┏━━"));
        assert!(output.contains("\n\x1b[36m┃\x1b[0m rendering: interactive\n"));
    }

    #[test]
    fn test_nested_edge_overwrites_prefix_space() {
        // Prefix "┃ ": bar at column 0, trailing space at column 1 -> CHA 2
        let output = demo_output(0, TermFeatures::all());
        assert!(output.contains("\x1b[36m┃\x1b[0m \x1b[?25l\r\x1b[32m\x1b[2G\x1b[32m┏━━ "));

        // Prefix "  ┃ ": bar at column 2, trailing space at column 3 -> CHA 4
        let output = demo_output(3, TermFeatures::all());
        assert!(output.starts_with("\x1b[?25l\r\x1b[36m\x1b[3G\x1b[36m┏━━"));
        assert!(output.contains("  \x1b[36m┃\x1b[0m \x1b[?25l\r\x1b[32m\x1b[4G\x1b[32m┏━━ "));
    }

    #[test]
    fn test_limited_demo_has_no_cursor_jumps() {
        let output = demo_output(2, TermFeatures::empty());
        assert!(!output.contains("\x1b[?25l"));
        assert!(!output.contains("G\x1b[32m┏"));
        assert!(output.contains(" \x1b[36m┃\x1b[0m \x1b[32m\x1b[32m┏━━ "));
        assert!(output.contains("rendering: capability-limited"));
    }
}
