//! Line-oriented UI output.
//!
//! - **frame**: frame edge lines (open, divider, close) with interactive and
//!   capability-limited rendering strategies

pub mod frame;

pub use frame::{prefix_width_of, Bracket, EdgeMarker, EdgeRenderer, FrameNesting};
