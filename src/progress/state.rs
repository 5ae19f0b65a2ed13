//! Live progress state owned by the caller.
//!
//! A [`ProgressBar`] holds the counters that change while work is done and
//! turns them into a [`Frame`] whenever a line has to be drawn.

use super::config::ProgressBarConfig;
use crate::format::Unit;
use crate::render::{FramePool, PooledFrame, Renderer};

use std::fmt;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, OnceLock, PoisonError};
use std::time::{Duration, Instant};

/// Progress counters, timer and annotation of one bar.
///
/// All setters take `&self`, so a bar can be shared through an
/// [`Arc`](std::sync::Arc) between workers and a display.
///
/// ```rust
/// # fn main() -> tierbar::Result<()> {
/// use tierbar::progress::ProgressBarBuilder;
/// use tierbar::render::Renderer;
///
/// let bar = ProgressBarBuilder::new(1000).build()?;
/// bar.add(250);
/// bar.set_additional("chunk 1");
///
/// let mut out = Vec::new();
/// bar.render_to(&Renderer::new().with_fixed_width(80), &mut out)?;
/// # Ok(())
/// # }
/// ```
pub struct ProgressBar {
    config: ProgressBarConfig,
    current: AtomicU64,
    additional: Mutex<String>,
    started: Instant,
    finished: OnceLock<Duration>,
}

impl fmt::Debug for ProgressBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgressBar")
            .field("config", &self.config)
            .field("current", &self.current())
            .field("elapsed", &self.elapsed())
            .finish()
    }
}

impl ProgressBar {
    /// Creates a new bar with the given configuration, starting its timer.
    pub(crate) fn new(config: ProgressBarConfig) -> Self {
        let additional = Mutex::new(config.additional.clone());
        Self {
            config,
            current: AtomicU64::new(0),
            additional,
            started: Instant::now(),
            finished: OnceLock::new(),
        }
    }

    /// Units expected in total.
    pub fn total(&self) -> u64 {
        self.config.total
    }

    /// How counts and speeds are printed.
    pub fn unit(&self) -> Unit {
        self.config.unit
    }

    /// Width of the bar region.
    pub fn bar_width(&self) -> usize {
        self.config.bar_width
    }

    /// Delay between two redraws of a display.
    pub fn refresh_interval(&self) -> Duration {
        self.config.refresh_interval
    }

    /// Units done so far. May exceed the total; frames clamp it.
    pub fn current(&self) -> u64 {
        self.current.load(Ordering::Relaxed)
    }

    /// Record `n` more units done and return the new count.
    ///
    /// The count saturates at `u64::MAX` instead of wrapping.
    pub fn add(&self, n: u64) -> u64 {
        let previous = self
            .current
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |c| {
                Some(c.saturating_add(n))
            })
            .unwrap_or_else(|c| c);
        previous.saturating_add(n)
    }

    /// Overwrite the number of units done.
    pub fn set_current(&self, n: u64) {
        self.current.store(n, Ordering::Relaxed);
    }

    /// Replace the annotation shown next to the counts.
    pub fn set_additional(&self, additional: impl AsRef<str>) {
        let mut current = self
            .additional
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        current.clear();
        current.push_str(additional.as_ref());
    }

    /// The current annotation.
    pub fn additional(&self) -> String {
        self.additional
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Whether the count has reached the total.
    pub fn is_finished(&self) -> bool {
        self.current() >= self.total()
    }

    /// Mark the work as done and stop the timer.
    pub fn finish(&self) {
        self.set_current(self.total());
        let _ = self.finished.set(self.started.elapsed());
    }

    /// Time since the bar was built, frozen once [`finish`](Self::finish) is called.
    pub fn elapsed(&self) -> Duration {
        self.finished
            .get()
            .copied()
            .unwrap_or_else(|| self.started.elapsed())
    }

    /// Average units per second since start.
    ///
    /// Zero until a full second has passed, meaning "not yet known".
    pub fn speed(&self) -> f64 {
        average_speed(self.current().min(self.total()), self.elapsed())
    }

    /// Capture a snapshot of the bar into a frame checked out of `pool`.
    ///
    /// The count is clamped to the total and the elapsed time truncated to
    /// whole seconds. A finished bar reports its overall average speed.
    pub fn frame<'p>(&self, pool: &'p FramePool) -> PooledFrame<'p> {
        let elapsed = self.elapsed();
        let current = self.current().min(self.total());

        let mut frame = pool.acquire();
        frame.unit = self.unit();
        frame.bar_width = self.bar_width();
        frame.current = current;
        frame.total = self.total();
        frame.elapsed = Duration::from_secs(elapsed.as_secs());
        frame.speed = if current == self.total() {
            let secs = elapsed.as_secs_f64();
            if secs > 0.0 {
                self.total() as f64 / secs
            } else {
                0.0
            }
        } else {
            average_speed(current, elapsed)
        };
        frame
            .additional
            .push_str(&self.additional.lock().unwrap_or_else(PoisonError::into_inner));
        frame
    }

    /// Draw the bar once to `w`.
    ///
    /// Uses the configured render function when there is one, the built-in
    /// tiers of `renderer` otherwise.
    pub fn render_to<W: Write>(&self, renderer: &Renderer, w: &mut W) -> io::Result<()> {
        let frame = self.frame(FramePool::global());
        let w: &mut dyn Write = w;
        match &self.config.render_fn {
            Some(render) => render(w, &*frame),
            None => renderer.render(w, &frame),
        }
    }
}

fn average_speed(current: u64, elapsed: Duration) -> f64 {
    if elapsed < Duration::from_secs(1) {
        return 0.0;
    }
    current as f64 / elapsed.as_secs_f64()
}
