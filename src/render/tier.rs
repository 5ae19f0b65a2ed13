//! Width-driven choice between the built-in layouts.

/// Minimum slack for [`Tier::Full`].
pub const FULL_SLACK: i64 = 60;
/// Minimum slack for [`Tier::Standard`].
pub const STANDARD_SLACK: i64 = 40;
/// Minimum slack for [`Tier::Lite`].
pub const LITE_SLACK: i64 = 20;
/// [`Tier::Mini`] needs strictly more slack than this.
pub const MINI_SLACK: i64 = 5;

/// One of the five layouts, from most to least verbose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// Bar, speed, counts with a two-decimal percentage, annotation,
    /// elapsed time and time left.
    Full,
    /// Abbreviated labels and a one-decimal percentage.
    Standard,
    /// Bar, speed, counts, annotation and a single time field.
    Lite,
    /// Bar and annotation only.
    Mini,
    /// A bracketed bar stretched across the terminal, nothing else.
    Fallback,
}

impl Tier {
    /// Pick the layout for a terminal `width` columns wide.
    ///
    /// ```rust
    /// use tierbar::render::Tier;
    ///
    /// assert_eq!(Tier::select(130, 40, "downloading chunk 42"), Tier::Full);
    /// assert_eq!(Tier::select(66, 40, "downloading chunk 42"), Tier::Mini);
    /// assert_eq!(Tier::select(0, 40, ""), Tier::Fallback);
    /// ```
    pub fn select(width: usize, bar_width: usize, additional: &str) -> Tier {
        Tier::from_slack(slack(width, bar_width, additional), !additional.is_empty())
    }

    /// Pick the layout for a given slack; the first matching tier wins.
    pub fn from_slack(slack: i64, has_additional: bool) -> Tier {
        match slack {
            s if s >= FULL_SLACK => Tier::Full,
            s if s >= STANDARD_SLACK => Tier::Standard,
            s if s >= LITE_SLACK => Tier::Lite,
            s if s > MINI_SLACK && has_additional => Tier::Mini,
            _ => Tier::Fallback,
        }
    }
}

/// Columns left once the bar and the annotation are accounted for.
///
/// The annotation is measured in bytes. May be negative.
pub fn slack(width: usize, bar_width: usize, additional: &str) -> i64 {
    to_i64(width) - to_i64(bar_width) - to_i64(additional.len())
}

fn to_i64(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}
