//! Frame snapshots and the pool they are recycled through.
//!
//! A [`Frame`] holds every value one render needs, captured once from the
//! live progress state so the renderer never reads shared counters. Frames
//! are checked out of a [`FramePool`] and go back to it when the
//! [`PooledFrame`] guard drops, which lets the annotation buffer be reused
//! from one refresh to the next.
//!
//! # Examples
//!
//! ```rust
//! use std::time::Duration;
//! use tierbar::render::FramePool;
//!
//! let pool = FramePool::new();
//! {
//!     let mut frame = pool.acquire();
//!     frame.bar_width = 40;
//!     frame.current = 500;
//!     frame.total = 1000;
//!     frame.elapsed = Duration::from_secs(95);
//!     assert!(!frame.is_complete());
//! }
//! assert_eq!(pool.available(), 1);
//! ```

use crate::format::Unit;

use std::ops::{Deref, DerefMut};
use std::sync::{Mutex, OnceLock, PoisonError};
use std::time::Duration;
use tracing::trace;

/// Idle frames kept by a pool; extra frames are dropped on release.
const MAX_IDLE: usize = 64;

/// Snapshot of all display-ready values for a single render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    /// How counts and speeds are printed.
    pub unit: Unit,
    /// Width of the bar region, brackets excluded.
    pub bar_width: usize,
    /// Units done, never above `total`.
    pub current: u64,
    /// Units expected in total.
    pub total: u64,
    /// Units per second; `0.0` while unknown.
    pub speed: f64,
    /// Short free-form annotation, may be empty.
    pub additional: String,
    /// Time since start, in whole seconds.
    pub elapsed: Duration,
}

impl Frame {
    /// Whether the snapshot shows finished progress.
    pub fn is_complete(&self) -> bool {
        self.current == self.total
    }

    /// Whether the speed, and therefore the time left, is still unknown.
    pub fn speed_unknown(&self) -> bool {
        self.speed == 0.0
    }

    fn reset(&mut self) {
        self.unit = Unit::default();
        self.bar_width = 0;
        self.current = 0;
        self.total = 0;
        self.speed = 0.0;
        self.additional.clear();
        self.elapsed = Duration::ZERO;
    }
}

/// Free-list of [`Frame`] slots with exclusive checkout.
///
/// Safe to share between threads; each checkout owns its frame until the
/// guard is dropped.
#[derive(Debug, Default)]
pub struct FramePool {
    free: Mutex<Vec<Frame>>,
}

impl FramePool {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide pool used when callers do not bring their own.
    pub fn global() -> &'static FramePool {
        static POOL: OnceLock<FramePool> = OnceLock::new();
        POOL.get_or_init(FramePool::new)
    }

    /// Check out a blank frame, reusing an idle one when available.
    pub fn acquire(&self) -> PooledFrame<'_> {
        let frame = self
            .free
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop()
            .unwrap_or_else(|| {
                trace!("frame pool empty, allocating a new frame");
                Frame::default()
            });
        PooledFrame {
            frame,
            pool: self,
        }
    }

    /// Number of idle frames waiting for reuse.
    pub fn available(&self) -> usize {
        self.free.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    fn release(&self, mut frame: Frame) {
        let mut free = self.free.lock().unwrap_or_else(PoisonError::into_inner);
        if free.len() < MAX_IDLE {
            frame.reset();
            free.push(frame);
        }
    }
}

/// A frame checked out of a [`FramePool`].
///
/// Dereferences to [`Frame`]. The frame goes back to the pool on drop and
/// is wiped before its next checkout, so nothing may keep it past the
/// render it was captured for.
#[derive(Debug)]
pub struct PooledFrame<'a> {
    frame: Frame,
    pool: &'a FramePool,
}

impl PooledFrame<'_> {
    /// Copy the frame out so it can outlive the checkout.
    pub fn to_owned_frame(&self) -> Frame {
        self.frame.clone()
    }
}

impl Deref for PooledFrame<'_> {
    type Target = Frame;

    fn deref(&self) -> &Frame {
        &self.frame
    }
}

impl DerefMut for PooledFrame<'_> {
    fn deref_mut(&mut self) -> &mut Frame {
        &mut self.frame
    }
}

impl Drop for PooledFrame<'_> {
    fn drop(&mut self) {
        self.pool.release(std::mem::take(&mut self.frame));
    }
}
