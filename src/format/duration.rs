//! Remaining-time estimates and compact duration text.

use std::time::Duration;

/// Estimate the time left to go from `current` to `total` at `speed`
/// units per second, truncated to whole seconds.
///
/// Callers are expected to check for an unknown (zero) speed first and
/// show a placeholder instead. A zero, negative or non-finite speed
/// returns [`Duration::ZERO`] rather than dividing by zero.
pub fn format_left(current: u64, total: u64, speed: f64) -> Duration {
    if !speed.is_finite() || speed <= 0.0 {
        return Duration::ZERO;
    }
    let remaining = total.saturating_sub(current) as f64 / speed;
    Duration::from_secs(remaining as u64)
}

/// Print a duration as `1h2m3s`, `4m5s` or `6s`.
///
/// Sub-second precision is dropped. Leading zero units are omitted but
/// inner ones are kept, so one hour prints as `1h0m0s`.
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs();
    let (h, m, s) = (secs / 3600, secs / 60 % 60, secs % 60);
    if h > 0 {
        format!("{h}h{m}m{s}s")
    } else if m > 0 {
        format!("{m}m{s}s")
    } else {
        format!("{s}s")
    }
}
