//! Error handling for the tierbar library.
//!
//! Rendering itself never fails except through the output sink, so the
//! render path returns [`std::io::Result`] and hands sink errors back
//! untouched. The errors below cover building progress bars and driving
//! the background display.

use std::io;
use thiserror::Error;

/// Errors that can happen when using tierbar.
#[derive(Error, Debug)]
pub enum Error {
    /// Error from an underlying system.
    ///
    /// Raised when the background refresh task panics or is cancelled.
    #[error("Internal error: {0}")]
    Internal(String),

    /// A progress bar was configured with a total of zero.
    ///
    /// An in-progress bar needs a positive total for its percentage and
    /// glyph math.
    #[error("Invalid total: {0}, a progress bar needs a positive total")]
    InvalidTotal(u64),

    /// A progress bar was configured with a zero-width bar region.
    #[error("Invalid bar width: {0}")]
    InvalidBarWidth(usize),

    /// I/O Error.
    ///
    /// Wraps failures of the output sink the display writes to.
    #[error("I/O error")]
    IOError {
        #[from]
        source: io::Error,
    },
}

/// Result type alias for operations that can fail with a tierbar error.
pub type Result<T> = std::result::Result<T, Error>;
