//! Live progress state, its configuration and its periodic display.
//!
//! # Overview
//!
//! - `state` - the [`ProgressBar`] counters, timer and frame capture
//! - `builder` - [`ProgressBarBuilder`] for configuring a bar
//! - `config` - configuration structure and render callback type
//! - `display` - [`ProgressDisplay`], a tokio task redrawing a bar in place
//!
//! # Examples
//!
//! ## Drawing a Bar Once
//!
//! ```rust
//! use tierbar::progress::ProgressBarBuilder;
//! use tierbar::render::Renderer;
//!
//! # fn example() -> tierbar::Result<()> {
//! let bar = ProgressBarBuilder::new(1000).bar_width(40).build()?;
//! bar.set_current(1000);
//!
//! let mut out = Vec::new();
//! bar.render_to(&Renderer::new().with_fixed_width(50), &mut out)?;
//! assert_eq!(out, format!("[{}]", "=".repeat(45)).into_bytes());
//! # Ok(())
//! # }
//! ```

pub(crate) mod builder;
pub(crate) mod config;
pub(crate) mod display;
pub(crate) mod state;

pub use builder::ProgressBarBuilder;
pub use config::{ProgressBarConfig, RenderCallback, DEFAULT_BAR_WIDTH, DEFAULT_REFRESH_INTERVAL};
pub use display::{ProgressDisplay, CLEAR_LINE};
pub use state::ProgressBar;
