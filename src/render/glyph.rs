//! Fixed-width bar glyphs.

/// Glyph filling the completed part of the bar.
pub const DONE: char = '=';
/// Glyph marking the leading edge of progress.
pub const CURSOR: char = '>';
/// Glyph filling the remaining part of the bar.
pub const UNDONE: char = ' ';

/// Render the bar body (without brackets) for `current` out of `total`,
/// exactly `width` characters long.
///
/// A finished bar is all [`DONE`]. Otherwise `done = floor(width * current / total)`
/// cells are filled, the last of them drawn as the [`CURSOR`], so the bar
/// never looks ahead of the real progress. When `done` is zero the bar is
/// blank.
///
/// ```rust
/// use tierbar::render::bar;
///
/// assert_eq!(bar(5, 10, 10), "====>     ");
/// assert_eq!(bar(10, 10, 4), "====");
/// assert_eq!(bar(0, 10, 4), "    ");
/// ```
pub fn bar(current: u64, total: u64, width: usize) -> String {
    let mut out = String::with_capacity(width);
    push_bar(&mut out, current, total, width);
    out
}

/// Append the bar body to `out`. See [`bar`].
pub(crate) fn push_bar(out: &mut String, current: u64, total: u64, width: usize) {
    if current >= total {
        out.extend(std::iter::repeat_n(DONE, width));
        return;
    }
    let done = filled(current, total, width);
    if done == 0 {
        out.extend(std::iter::repeat_n(UNDONE, width));
        return;
    }
    out.extend(std::iter::repeat_n(DONE, done - 1));
    out.push(CURSOR);
    out.extend(std::iter::repeat_n(UNDONE, width - done));
}

/// Number of filled cells for an unfinished bar.
fn filled(current: u64, total: u64, width: usize) -> usize {
    let done = (width as f64 * current as f64 / total as f64) as usize;
    done.min(width)
}
