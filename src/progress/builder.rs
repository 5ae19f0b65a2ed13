//! Builder pattern implementation for creating [`ProgressBar`] instances.
//!
//! # Examples
//!
//! ```rust
//! use std::time::Duration;
//! use tierbar::progress::ProgressBarBuilder;
//!
//! # fn example() -> tierbar::Result<()> {
//! let bar = ProgressBarBuilder::new(4096)
//!     .bytes()
//!     .bar_width(30)
//!     .additional("fetching index")
//!     .refresh_interval(Duration::from_millis(250))
//!     .build()?;
//! assert_eq!(bar.total(), 4096);
//! # Ok(())
//! # }
//! ```

use super::config::ProgressBarConfig;
use super::state::ProgressBar;
use crate::error::{Error, Result};
use crate::format::Unit;
use crate::render::Frame;

use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// A builder used to create a [`ProgressBar`].
///
/// ```rust
/// # fn main() -> tierbar::Result<()> {
/// use tierbar::progress::ProgressBarBuilder;
///
/// let bar = ProgressBarBuilder::new(100).bar_width(20).build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct ProgressBarBuilder {
    config: ProgressBarConfig,
}

impl ProgressBarBuilder {
    /// Creates a builder for a bar counting up to `total`.
    pub fn new(total: u64) -> Self {
        let mut builder = ProgressBarBuilder::default();
        builder.config.total = total;
        builder
    }

    /// Set how counts and speeds are printed.
    pub fn unit(mut self, unit: Unit) -> Self {
        self.config.unit = unit;
        self
    }

    /// Convenience function to count bytes.
    pub fn bytes(self) -> Self {
        self.unit(Unit::Bytes)
    }

    /// Set the width of the bar region.
    pub fn bar_width(mut self, bar_width: usize) -> Self {
        self.config.bar_width = bar_width;
        self
    }

    /// Set the initial annotation.
    pub fn additional(mut self, additional: impl Into<String>) -> Self {
        self.config.additional = additional.into();
        self
    }

    /// Set the delay between two redraws of a display.
    pub fn refresh_interval(mut self, interval: Duration) -> Self {
        self.config.refresh_interval = interval;
        self
    }

    /// Draw frames with `render` instead of the built-in tiers.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tierbar::progress::ProgressBarBuilder;
    /// use tierbar::format::format_percent;
    ///
    /// # fn main() -> tierbar::Result<()> {
    /// let bar = ProgressBarBuilder::new(10)
    ///     .render_fn(|w, frame| write!(w, "{:.0}%", format_percent(frame.current, frame.total)))
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn render_fn<F>(mut self, render: F) -> Self
    where
        F: Fn(&mut dyn Write, &Frame) -> io::Result<()> + Send + Sync + 'static,
    {
        self.config.render_fn = Some(Arc::new(Box::new(render)));
        self
    }

    /// Create the [`ProgressBar`] with the specified options.
    ///
    /// Fails when the total or the bar width is zero.
    pub fn build(self) -> Result<ProgressBar> {
        if self.config.total == 0 {
            debug!("rejecting progress bar with zero total");
            return Err(Error::InvalidTotal(self.config.total));
        }
        if self.config.bar_width == 0 {
            debug!("rejecting progress bar with zero bar width");
            return Err(Error::InvalidBarWidth(self.config.bar_width));
        }
        Ok(ProgressBar::new(self.config))
    }
}
