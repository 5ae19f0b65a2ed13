//! Adaptive rendering of a single progress line.
//!
//! A [`Frame`] snapshot goes in, one line of text comes out. The line's
//! verbosity depends on how many columns remain once the bar and the
//! annotation are placed; see [`Tier`] for the thresholds.
//!
//! # Overview
//!
//! - `glyph` - the `[===>   ]` bar body
//! - `frame` - frame snapshots and their pool
//! - `spinner` - the "calculating" placeholder animation
//! - `tier` - layout selection by available width
//! - `template` - expansion of a tier into text
//!
//! # Examples
//!
//! ```rust
//! use std::time::Duration;
//! use tierbar::render::{Frame, Renderer};
//!
//! let renderer = Renderer::new().with_fixed_width(50);
//! let frame = Frame {
//!     bar_width: 40,
//!     current: 1000,
//!     total: 1000,
//!     elapsed: Duration::from_secs(3),
//!     ..Frame::default()
//! };
//! assert_eq!(renderer.line(&frame, 50), format!("[{}]", "=".repeat(45)));
//! ```

pub mod frame;
pub mod glyph;
pub mod spinner;
pub mod template;
pub mod tier;

pub use frame::{Frame, FramePool, PooledFrame};
pub use glyph::bar;
pub use spinner::Spinner;
pub use template::{Renderer, WidthProbe};
pub use tier::Tier;
