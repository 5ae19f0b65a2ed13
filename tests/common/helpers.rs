use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tierbar::{Frame, ProgressBar, ProgressBarBuilder, Renderer, Spinner};
use tracing_subscriber::EnvFilter;

// Common test constants
pub const TEST_BAR_WIDTH: usize = 40;
pub const TEST_ADDITIONAL: &str = "downloading chunk 42";
pub const TEST_TOTAL: u64 = 1000;

/// Installs a tracing subscriber honouring `RUST_LOG`, once per test binary
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A cloneable in-memory sink, readable while a display task writes to it
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        let bytes = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8(bytes.clone()).expect("Rendered output is not UTF-8")
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A sink rejecting every write
pub struct BrokenSink;

impl Write for BrokenSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// === Frame Helpers ===

/// Creates a count frame with the default test bar width
pub fn create_test_frame(
    current: u64,
    total: u64,
    speed: f64,
    additional: &str,
    elapsed_secs: u64,
) -> Frame {
    Frame {
        bar_width: TEST_BAR_WIDTH,
        current,
        total,
        speed,
        additional: additional.to_string(),
        elapsed: Duration::from_secs(elapsed_secs),
        ..Frame::default()
    }
}

/// The half-done frame used by most golden lines
pub fn create_half_frame() -> Frame {
    create_test_frame(500, TEST_TOTAL, 15.67, TEST_ADDITIONAL, 95)
}

/// A finished frame annotated with "finished"
pub fn create_complete_frame() -> Frame {
    create_test_frame(TEST_TOTAL, TEST_TOTAL, 20.0, "finished", 95)
}

// === Renderer Helpers ===

/// Creates a renderer pinned to `width` columns with its own spinner
pub fn create_fixed_renderer(width: usize) -> Renderer {
    Renderer::new()
        .with_fixed_width(width)
        .with_spinner(Arc::new(Spinner::with_seed(0)))
}

/// Renders `frame` through the public entry point and returns the text
pub fn render_to_string(renderer: &Renderer, frame: &Frame) -> String {
    let mut out = Vec::new();
    renderer
        .render(&mut out, frame)
        .expect("Rendering to a Vec cannot fail");
    String::from_utf8(out).expect("Rendered output is not UTF-8")
}

/// Expected bar body of `done` cells out of `width`, cursor included
pub fn expected_bar(done: usize, width: usize) -> String {
    match done {
        0 => " ".repeat(width),
        d if d >= width => "=".repeat(width),
        d => format!("{}>{}", "=".repeat(d - 1), " ".repeat(width - d)),
    }
}

// === Progress Bar Helpers ===

/// Creates a shared count bar with a short refresh interval
pub fn create_test_progress_bar(total: u64) -> Arc<ProgressBar> {
    Arc::new(
        ProgressBarBuilder::new(total)
            .refresh_interval(Duration::from_millis(10))
            .build()
            .expect("Failed to build test progress bar"),
    )
}

/// Returns the text after the last carriage return, erase sequence and
/// trailing newline removed
pub fn last_line(output: &str) -> &str {
    let line = output.rsplit('\r').next().unwrap_or_default();
    line.strip_prefix(ERASE_LINE)
        .unwrap_or(line)
        .trim_end_matches('\n')
}

/// ANSI "erase entire line"
pub const ERASE_LINE: &str = "\x1b[2K";

/// Replays `output` on a model of one terminal row and returns what stays
/// visible: `\r` moves the cursor home, `ESC[2K` blanks the row, other
/// characters overwrite the cell under the cursor. Stops at the first newline.
pub fn replay_terminal_row(output: &str) -> String {
    let mut row: Vec<char> = Vec::new();
    let mut cursor = 0;
    let mut rest = output;
    while let Some(c) = rest.chars().next() {
        if let Some(tail) = rest.strip_prefix(ERASE_LINE) {
            row.iter_mut().for_each(|cell| *cell = ' ');
            rest = tail;
            continue;
        }
        rest = &rest[c.len_utf8()..];
        match c {
            '\r' => cursor = 0,
            '\n' => break,
            c => {
                if cursor < row.len() {
                    row[cursor] = c;
                } else {
                    row.push(c);
                }
                cursor += 1;
            }
        }
    }
    row.into_iter().collect::<String>().trim_end().to_string()
}
