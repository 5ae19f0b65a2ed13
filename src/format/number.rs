//! Count, byte-size, speed and percentage formatting.

use indicatif::HumanBytes;

/// Placeholder shown while the speed is not yet known.
pub const UNKNOWN_SPEED: &str = "--/s";

/// The kind of quantity a progress bar is counting.
///
/// Controls how counts and speeds are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Unit {
    /// Plain items, printed as decimal integers.
    #[default]
    Count,
    /// Bytes, printed with a binary-scaled suffix such as `"1.50 MiB"`.
    ///
    /// This is indicatif's `HumanBytes` form: a space before the unit and
    /// 1024-based prefixes, unlike the compact decimal `"1.2MB"` style.
    Bytes,
}

/// Format `n` according to `unit`.
///
/// ```rust
/// use tierbar::format::{format_count, Unit};
///
/// assert_eq!(format_count(42, Unit::Count), "42");
/// assert_eq!(format_count(3 * 1024 * 1024, Unit::Bytes), "3.00 MiB");
/// ```
pub fn format_count(n: u64, unit: Unit) -> String {
    match unit {
        Unit::Count => n.to_string(),
        Unit::Bytes => HumanBytes(n).to_string(),
    }
}

/// Format a per-second rate.
///
/// A speed of exactly zero means the rate is not yet known and yields
/// [`UNKNOWN_SPEED`] whatever the unit. Byte speeds are truncated to whole
/// bytes before scaling; counts keep two decimal places.
pub fn format_speed(speed: f64, unit: Unit) -> String {
    if speed == 0.0 {
        return UNKNOWN_SPEED.to_string();
    }
    match unit {
        Unit::Bytes => format!("{}/s", HumanBytes(speed as u64)),
        Unit::Count => format!("{speed:.2}/s"),
    }
}

/// Completion percentage of `current` out of `total`.
///
/// Callers pick the precision. A zero `total` counts as fully complete.
pub fn format_percent(current: u64, total: u64) -> f64 {
    if total == 0 {
        return 100.0;
    }
    current as f64 * 100.0 / total as f64
}
