//! Calendar printer with ISO week numbers.
//!
//! Features:
//! - Single month view with a leading ISO week number column
//! - Whole year grid packed into as many columns as the terminal fits (up to 6)
//! - Highlighting of the current day

pub mod args;
pub mod calendar;
pub mod error;
pub mod formatter;
pub mod types;
