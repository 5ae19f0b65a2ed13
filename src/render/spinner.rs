//! Rotating placeholder shown while the time left is unknown.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};

/// Braille spinner frames, cycled in order.
pub const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Text placed in front of the spinner glyph.
pub const PLACEHOLDER: &str = "calculating";

/// Cosmetic spinner advanced once per call.
///
/// The counter is atomic, so one spinner can be shared by bars rendering
/// from different threads.
///
/// ```rust
/// use tierbar::render::Spinner;
///
/// let spinner = Spinner::with_seed(0);
/// assert_eq!(spinner.spin(), "⠙");
/// assert_eq!(spinner.placeholder(), "calculating⠹");
/// ```
#[derive(Debug, Default)]
pub struct Spinner {
    index: AtomicUsize,
}

impl Spinner {
    /// Create a spinner starting at the first frame.
    pub const fn new() -> Self {
        Self::with_seed(0)
    }

    /// Create a spinner whose counter starts at `seed`.
    pub const fn with_seed(seed: usize) -> Self {
        Self {
            index: AtomicUsize::new(seed),
        }
    }

    /// The spinner shared by every renderer that is not given its own.
    pub fn shared() -> Arc<Spinner> {
        static SPINNER: OnceLock<Arc<Spinner>> = OnceLock::new();
        SPINNER.get_or_init(|| Arc::new(Spinner::new())).clone()
    }

    /// Advance the counter and return the glyph it now points at.
    pub fn spin(&self) -> &'static str {
        let index = self.index.fetch_add(1, Ordering::Relaxed).wrapping_add(1);
        FRAMES[index % FRAMES.len()]
    }

    /// [`PLACEHOLDER`] followed by the next glyph.
    pub fn placeholder(&self) -> String {
        format!("{PLACEHOLDER}{}", self.spin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spin_wraps() {
        let spinner = Spinner::with_seed(FRAMES.len() - 2);
        assert_eq!(spinner.spin(), FRAMES[FRAMES.len() - 1]);
        assert_eq!(spinner.spin(), FRAMES[0]);
    }

    #[test]
    fn test_spin_shared_across_threads() {
        let spinner = Spinner::new();
        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    for _ in 0..25 {
                        spinner.spin();
                    }
                });
            }
        });
        // 100 advances bring the counter back to a multiple of the frame count.
        assert_eq!(spinner.spin(), FRAMES[1]);
    }
}
