//! Tierbar renders single-line progress bars that adapt their verbosity to
//! the width of the terminal.
//!
//! # Quick Start
//!
//! ```rust
//! use tierbar::{ProgressBarBuilder, Renderer};
//!
//! # fn main() -> Result<(), tierbar::Error> {
//! let bar = ProgressBarBuilder::new(1000)
//!     .additional("downloading chunk 42")
//!     .build()?;
//! bar.add(500);
//!
//! let mut line = Vec::new();
//! bar.render_to(&Renderer::new().with_fixed_width(130), &mut line)?;
//! # Ok(())
//! # }
//! ```
//!
//! On a 130 column terminal that line reads:
//!
//! ```text
//! [===================>                    ]  --/s  500(50.00%) of 1000 [downloading chunk 42]  Elapsed: 0s  Left: calculating⠙
//! ```
//!
//! Narrower terminals get shorter layouts, down to a bare bracketed bar.
//!
//! # Module Organization
//!
//! - [`format`] - Pure formatters for counts, speeds, percentages and durations
//! - [`render`] - Frames, bar glyphs, tier selection and the renderer
//! - [`progress`] - Live progress state, its builder and the periodic display
//! - [`error`] - Centralized error handling with the `Error` enum
//! - [`utils`] - Terminal width probing

pub mod error;
pub mod format;
pub mod progress;
pub mod render;
pub mod utils;

pub use error::{Error, Result};
pub use format::{format_count, format_duration, format_left, format_percent, format_speed, Unit};
pub use progress::{ProgressBar, ProgressBarBuilder, ProgressDisplay};
pub use render::{bar, Frame, FramePool, Renderer, Spinner, Tier};
pub use utils::terminal_width;
