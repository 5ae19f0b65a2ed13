//! Shared utility functions.
//!
//! # Overview
//!
//! The utils module currently contains:
//!
//! - [`winsize`] - terminal width probing
//!
//! # Examples
//!
//! ```rust
//! use tierbar::utils::terminal_width;
//!
//! // Zero when stdout is not a terminal.
//! let columns = terminal_width();
//! println!("terminal is {columns} columns wide");
//! ```

pub mod winsize;

pub use winsize::terminal_width;
