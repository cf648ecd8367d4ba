//! Terminal capability signals.
//!
//! Two signals drive rendering decisions:
//!
//! - **cursor addressing**: absent in capability-limited environments such as
//!   CI log viewers, which understand SGR colors but not column jumps
//! - **emoji**: whether glyphs may use their Unicode form
//!
//! Detection only reads the `CI` environment variable and the target OS.
//! Everything else consumes a [`TermFeatures`] snapshot or a
//! [`CapabilitySource`].

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Features the attached terminal supports
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TermFeatures: u8 {
        /// Absolute column positioning (CHA) and cursor hide/show
        const CURSOR_ADDRESSING = 0b0000_0001;
        /// Emoji and wide Unicode symbols render correctly
        const EMOJI             = 0b0000_0010;
    }
}

impl Default for TermFeatures {
    fn default() -> Self {
        TermFeatures::all()
    }
}

impl TermFeatures {
    /// Snapshot of the current process environment
    pub fn detect() -> Self {
        let ci = std::env::var("CI").ok();
        Self::from_signals(ci.as_deref(), cfg!(windows))
    }

    /// Build a snapshot from raw signal values.
    ///
    /// `ci` is the value of the `CI` environment variable, if set.
    pub fn from_signals(ci: Option<&str>, windows: bool) -> Self {
        let mut features = TermFeatures::empty();
        if !ci_is_set(ci) {
            features |= TermFeatures::CURSOR_ADDRESSING;
        }
        if !windows {
            features |= TermFeatures::EMOJI;
        }
        features
    }

    pub fn is_capability_limited(&self) -> bool {
        !self.contains(TermFeatures::CURSOR_ADDRESSING)
    }

    pub fn supports_emoji(&self) -> bool {
        self.contains(TermFeatures::EMOJI)
    }

    /// Apply configured overrides on top of this snapshot
    pub fn with_overrides(mut self, mode: RenderMode, emoji: EmojiMode) -> Self {
        match mode {
            RenderMode::Auto => {}
            RenderMode::Interactive => self.insert(TermFeatures::CURSOR_ADDRESSING),
            RenderMode::Limited => self.remove(TermFeatures::CURSOR_ADDRESSING),
        }
        match emoji {
            EmojiMode::Auto => {}
            EmojiMode::Always => self.insert(TermFeatures::EMOJI),
            EmojiMode::Never => self.remove(TermFeatures::EMOJI),
        }
        self
    }
}

/// `CI` counts as set unless it is missing or empty; `CI=0` still counts.
fn ci_is_set(ci: Option<&str>) -> bool {
    !matches!(ci, None | Some(""))
}

/// A queryable source of capability signals.
///
/// [`TermFeatures`] answers from a fixed snapshot; [`LiveCapabilities`]
/// re-reads the environment on every call.
pub trait CapabilitySource {
    fn is_capability_limited(&self) -> bool;
    fn supports_emoji(&self) -> bool;

    fn snapshot(&self) -> TermFeatures {
        let mut features = TermFeatures::empty();
        features.set(TermFeatures::CURSOR_ADDRESSING, !self.is_capability_limited());
        features.set(TermFeatures::EMOJI, self.supports_emoji());
        features
    }
}

impl CapabilitySource for TermFeatures {
    fn is_capability_limited(&self) -> bool {
        TermFeatures::is_capability_limited(self)
    }

    fn supports_emoji(&self) -> bool {
        TermFeatures::supports_emoji(self)
    }

    fn snapshot(&self) -> TermFeatures {
        *self
    }
}

/// Capability source that re-evaluates detection on each query
#[derive(Debug, Clone, Copy, Default)]
pub struct LiveCapabilities;

impl CapabilitySource for LiveCapabilities {
    fn is_capability_limited(&self) -> bool {
        TermFeatures::detect().is_capability_limited()
    }

    fn supports_emoji(&self) -> bool {
        TermFeatures::detect().supports_emoji()
    }
}

/// How frame edges are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Follow the `CI` signal
    #[default]
    Auto,
    /// Always use cursor addressing
    Interactive,
    /// Never move the cursor
    Limited,
}

/// Whether glyphs use their Unicode form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmojiMode {
    #[default]
    Auto,
    Always,
    Never,
}
