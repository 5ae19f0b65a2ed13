//! Expansion of the chosen tier into a single output line.

use super::frame::Frame;
use super::glyph::push_bar;
use super::spinner::Spinner;
use super::tier::Tier;
use crate::format::{format_count, format_duration, format_left, format_percent, format_speed};
use crate::utils::winsize::terminal_width;

use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;
use tracing::trace;

/// Columns the fallback tier leaves for its brackets and the cursor.
pub const FALLBACK_MARGIN: usize = 5;

/// Function returning the terminal width in columns, `0` when unknown.
pub type WidthProbe = Arc<dyn Fn() -> usize + Send + Sync>;

/// Renders frames with the built-in tiers.
///
/// The renderer owns the terminal width probe and the spinner used for the
/// "time left" placeholder, so tests can pin both.
///
/// ```rust
/// use std::time::Duration;
/// use tierbar::render::{Frame, Renderer};
///
/// let renderer = Renderer::new().with_fixed_width(130);
/// let frame = Frame {
///     bar_width: 40,
///     current: 750,
///     total: 1000,
///     speed: 2.5,
///     elapsed: Duration::from_secs(200),
///     ..Frame::default()
/// };
///
/// let mut out = Vec::new();
/// renderer.render(&mut out, &frame).unwrap();
/// assert!(String::from_utf8(out).unwrap().ends_with("Elapsed: 3m20s  Left: 1m40s "));
/// ```
#[derive(Clone)]
pub struct Renderer {
    probe: WidthProbe,
    spinner: Arc<Spinner>,
}

impl fmt::Debug for Renderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Renderer")
            .field("spinner", &self.spinner)
            .finish_non_exhaustive()
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            probe: Arc::new(terminal_width),
            spinner: Spinner::shared(),
        }
    }
}

impl Renderer {
    /// Create a renderer probing the real terminal and using the shared spinner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the terminal width probe.
    pub fn with_width_probe<F>(mut self, probe: F) -> Self
    where
        F: Fn() -> usize + Send + Sync + 'static,
    {
        self.probe = Arc::new(probe);
        self
    }

    /// Always render as if the terminal were `width` columns wide.
    pub fn with_fixed_width(self, width: usize) -> Self {
        self.with_width_probe(move || width)
    }

    /// Use `spinner` instead of the shared one.
    pub fn with_spinner(mut self, spinner: Arc<Spinner>) -> Self {
        self.spinner = spinner;
        self
    }

    /// Current terminal width as reported by the probe.
    pub fn width(&self) -> usize {
        (self.probe)()
    }

    /// Write the line for `frame` to `w`.
    ///
    /// Sink errors are returned as they are, without retrying.
    pub fn render<W: Write + ?Sized>(&self, w: &mut W, frame: &Frame) -> io::Result<()> {
        let line = self.line(frame, self.width());
        w.write_all(line.as_bytes())
    }

    /// Build the line for `frame` on a terminal `width` columns wide.
    pub fn line(&self, frame: &Frame, width: usize) -> String {
        let tier = Tier::select(width, frame.bar_width, &frame.additional);
        trace!(?tier, width, bar_width = frame.bar_width, "selected tier");
        self.expand(tier, width, frame)
    }

    /// Expand `tier` for `frame`, whatever the width would have chosen.
    pub fn expand(&self, tier: Tier, width: usize, frame: &Frame) -> String {
        let mut line = String::with_capacity(width.max(frame.bar_width) + 2);
        line.push('[');
        if tier == Tier::Fallback {
            push_bar(
                &mut line,
                frame.current,
                frame.total,
                width.saturating_sub(FALLBACK_MARGIN),
            );
            line.push(']');
            return line;
        }
        push_bar(&mut line, frame.current, frame.total, frame.bar_width);
        line.push(']');

        if tier == Tier::Mini {
            line.push_str(&format!(" {} ", frame.additional));
            return line;
        }

        let speed = format_speed(frame.speed, frame.unit);
        let current = format_count(frame.current, frame.unit);
        let total = format_count(frame.total, frame.unit);
        let percent = format_percent(frame.current, frame.total);
        let elapsed = format_duration(frame.elapsed);

        match tier {
            Tier::Full => {
                line.push_str(&format!("  {speed}  {current}({percent:.2}%) of {total}"));
                push_additional(&mut line, &frame.additional);
                line.push_str(&format!("  Elapsed: {elapsed}  "));
                if frame.is_complete() {
                    line.push_str("Complete");
                } else {
                    line.push_str("Left: ");
                    line.push_str(&self.left(frame));
                }
            }
            Tier::Standard => {
                line.push_str(&format!(" {speed} {current}/{total}({percent:.1}%)"));
                push_additional(&mut line, &frame.additional);
                line.push_str(&format!(" ET: {elapsed} "));
                if frame.is_complete() {
                    line.push_str("Done");
                } else {
                    line.push_str("LT: ");
                    line.push_str(&self.left(frame));
                }
            }
            _ => {
                line.push_str(&format!(" {speed} {current}/{total}"));
                push_additional(&mut line, &frame.additional);
                if frame.is_complete() {
                    line.push_str(&format!(" E: {elapsed}"));
                } else {
                    line.push_str(" L: ");
                    line.push_str(&self.left(frame));
                }
            }
        }
        line.push(' ');
        line
    }

    /// Time left for an unfinished frame, or the spinner while speed is unknown.
    fn left(&self, frame: &Frame) -> String {
        if frame.speed_unknown() {
            self.spinner.placeholder()
        } else {
            format_duration(format_left(frame.current, frame.total, frame.speed))
        }
    }
}

fn push_additional(line: &mut String, additional: &str) {
    if !additional.is_empty() {
        line.push_str(&format!(" [{additional}]"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn frame(current: u64, speed: f64) -> Frame {
        Frame {
            bar_width: 10,
            current,
            total: 100,
            speed,
            elapsed: Duration::from_secs(5),
            ..Frame::default()
        }
    }

    #[test]
    fn test_unknown_speed_shows_placeholder() {
        let renderer = Renderer::new().with_spinner(Arc::new(Spinner::with_seed(0)));
        let line = renderer.expand(Tier::Lite, 80, &frame(10, 0.0));
        assert_eq!(line, "[>         ] --/s 10/100 L: calculating⠙ ");
    }

    #[test]
    fn test_complete_ignores_speed() {
        let renderer = Renderer::new();
        let line = renderer.expand(Tier::Standard, 80, &frame(100, 0.0));
        assert_eq!(line, "[==========] --/s 100/100(100.0%) ET: 5s Done ");
    }

    #[test]
    fn test_fallback_narrower_than_margin() {
        let renderer = Renderer::new();
        assert_eq!(renderer.expand(Tier::Fallback, 3, &frame(50, 1.0)), "[]");
    }

    #[test]
    fn test_render_propagates_sink_error() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }
        let renderer = Renderer::new().with_fixed_width(80);
        let err = renderer.render(&mut Broken, &frame(10, 1.0)).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
