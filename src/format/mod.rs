//! Formatters turning raw progress counters into display strings.
//!
//! Every function in this module is pure: no state, no I/O, no error
//! returns. They are the building blocks of the built-in tiers in
//! [`crate::render`] and can be called directly to assemble custom
//! layouts.
//!
//! # Overview
//!
//! - `number` - counts, byte sizes, speeds and percentages
//! - `duration` - remaining-time estimates and compact duration text
//!
//! # Examples
//!
//! ```rust
//! use std::time::Duration;
//! use tierbar::format::{format_count, format_duration, format_left, format_speed, Unit};
//!
//! assert_eq!(format_count(1000, Unit::Count), "1000");
//! assert_eq!(format_speed(0.0, Unit::Bytes), "--/s");
//! assert_eq!(format_speed(15.67, Unit::Count), "15.67/s");
//!
//! let left = format_left(500, 1000, 15.67);
//! assert_eq!(format_duration(left), "31s");
//! assert_eq!(format_duration(Duration::from_secs(95)), "1m35s");
//! ```

pub mod duration;
pub mod number;

pub use duration::{format_duration, format_left};
pub use number::{format_count, format_percent, format_speed, Unit};
