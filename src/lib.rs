//! frameline - framed, colorized CLI output lines
//!
//! Builds the escape sequences for bordered output blocks and status glyphs,
//! degrading gracefully on terminals that cannot reposition the cursor
//! (CI log capture) or render emoji.
//!
//! # Example
//!
//! ```
//! use frameline::core::{GlyphRegistry, TermFeatures};
//! use frameline::ui::EdgeRenderer;
//!
//! let features = TermFeatures::EMOJI; // no cursor addressing, as under CI
//! let renderer = EdgeRenderer::new(features);
//!
//! let mut out = renderer.open("Build", "green")?;
//! let check = GlyphRegistry::standard().lookup("v")?;
//! out.push_str(&format!("┃ {} compiled\n", check.render(&features)));
//! out.push_str(&renderer.close("", "green", Some("3.2s"))?);
//!
//! assert!(out.contains("┏━━"));
//! assert!(out.contains(" 3.2s "));
//! # Ok::<(), frameline::core::UiError>(())
//! ```

pub mod config;
pub mod core;
pub mod ui;
