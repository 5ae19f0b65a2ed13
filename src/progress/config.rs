//! Configuration structures and defaults for progress bars.
//!
//! # Examples
//!
//! ## Custom Render Function
//!
//! ```rust
//! use std::io::Write;
//! use tierbar::progress::RenderCallback;
//! use tierbar::render::{bar, Frame};
//!
//! let render: RenderCallback = Box::new(|w: &mut dyn Write, frame: &Frame| {
//!     write!(w, "|{}| {}/{}", bar(frame.current, frame.total, 20), frame.current, frame.total)
//! });
//! ```

use crate::format::Unit;
use crate::render::Frame;

use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;

/// Default width of the bar region.
pub const DEFAULT_BAR_WIDTH: usize = 40;

/// Default delay between two redraws of a [`ProgressDisplay`](super::ProgressDisplay).
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(1);

/// Callback type replacing the built-in tiers when drawing a frame.
pub type RenderCallback = Box<dyn Fn(&mut dyn Write, &Frame) -> io::Result<()> + Send + Sync>;

/// Configuration structure for a progress bar.
#[derive(Clone)]
pub struct ProgressBarConfig {
    /// Units expected in total.
    pub total: u64,
    /// How counts and speeds are printed.
    pub unit: Unit,
    /// Width of the bar region, brackets excluded.
    pub bar_width: usize,
    /// Initial annotation.
    pub additional: String,
    /// Delay between two redraws.
    pub refresh_interval: Duration,
    /// Custom renderer used instead of the built-in tiers.
    pub render_fn: Option<Arc<RenderCallback>>,
}

impl fmt::Debug for ProgressBarConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgressBarConfig")
            .field("total", &self.total)
            .field("unit", &self.unit)
            .field("bar_width", &self.bar_width)
            .field("additional", &self.additional)
            .field("refresh_interval", &self.refresh_interval)
            .field("render_fn", &self.render_fn.is_some())
            .finish()
    }
}

impl Default for ProgressBarConfig {
    fn default() -> Self {
        Self {
            total: 0,
            unit: Unit::default(),
            bar_width: DEFAULT_BAR_WIDTH,
            additional: String::new(),
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
            render_fn: None,
        }
    }
}
