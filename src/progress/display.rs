//! Periodic redrawing of a progress bar.
//!
//! [`ProgressDisplay`] runs a tokio task that redraws one [`ProgressBar`] in
//! place every refresh interval, until the bar completes or the display is
//! finished.
//!
//! # Examples
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use tierbar::progress::{ProgressBarBuilder, ProgressDisplay};
//! use tierbar::render::Renderer;
//!
//! # async fn example() -> tierbar::Result<()> {
//! let bar = Arc::new(ProgressBarBuilder::new(3).build()?);
//! let display = ProgressDisplay::start(bar.clone(), Renderer::new(), std::io::stderr());
//!
//! for _ in 0..3 {
//!     bar.add(1);
//! }
//!
//! display.join().await?;
//! # Ok(())
//! # }
//! ```

use super::state::ProgressBar;
use crate::error::{Error, Result};
use crate::render::Renderer;

use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;
use tokio::task::JoinHandle;
use tracing::debug;

/// Carriage return followed by "erase entire line", so a shorter line
/// never leaves the tail of the previous one behind.
pub const CLEAR_LINE: &[u8] = b"\r\x1b[2K";

/// Background task keeping a progress line up to date.
#[derive(Debug)]
pub struct ProgressDisplay {
    bar: Arc<ProgressBar>,
    stop: Arc<Notify>,
    handle: JoinHandle<io::Result<()>>,
}

impl ProgressDisplay {
    /// Start redrawing `bar` to `sink` every refresh interval.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start<W>(bar: Arc<ProgressBar>, renderer: Renderer, sink: W) -> Self
    where
        W: Write + Send + 'static,
    {
        let stop = Arc::new(Notify::new());
        debug!(
            total = bar.total(),
            interval = ?bar.refresh_interval(),
            "starting progress display"
        );
        let handle = tokio::spawn(refresh(bar.clone(), renderer, sink, stop.clone()));
        Self { bar, stop, handle }
    }

    /// The bar being displayed.
    pub fn bar(&self) -> Arc<ProgressBar> {
        self.bar.clone()
    }

    /// Wait until the bar completes, then draw its final line.
    pub async fn join(self) -> Result<()> {
        wait(self.handle).await
    }

    /// Stop redrawing now and draw the line one last time.
    ///
    /// The bar itself is left as it is; call [`ProgressBar::finish`] first
    /// to show it as complete.
    pub async fn finish(self) -> Result<()> {
        self.stop.notify_one();
        wait(self.handle).await
    }
}

async fn wait(handle: JoinHandle<io::Result<()>>) -> Result<()> {
    handle
        .await
        .map_err(|e| Error::Internal(format!("progress display task failed: {e}")))??;
    Ok(())
}

async fn refresh<W: Write>(
    bar: Arc<ProgressBar>,
    renderer: Renderer,
    mut sink: W,
    stop: Arc<Notify>,
) -> io::Result<()> {
    // A zero period would make tokio panic.
    let period = bar.refresh_interval().max(Duration::from_millis(1));
    let mut ticker = tokio::time::interval(period);
    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = stop.notified() => break,
        }
        if bar.is_finished() {
            break;
        }
        draw(&bar, &renderer, &mut sink)?;
    }
    draw(&bar, &renderer, &mut sink)?;
    sink.write_all(b"\n")?;
    sink.flush()?;
    debug!(current = bar.current(), "progress display stopped");
    Ok(())
}

fn draw<W: Write>(bar: &ProgressBar, renderer: &Renderer, sink: &mut W) -> io::Result<()> {
    sink.write_all(CLEAR_LINE)?;
    bar.render_to(renderer, sink)?;
    sink.flush()
}
