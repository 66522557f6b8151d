//! Type definitions and constants for calendar formatting.

use chrono::{NaiveDate, Weekday};

/// Calendar formatting context shared by every render call.
#[derive(Clone, Debug)]
pub struct CalContext {
    /// Today's date for highlighting, captured once at startup.
    pub today: NaiveDate,
    /// Whether to use ANSI color codes in output.
    pub color: bool,
}

/// What the command line asked to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayMode {
    /// A single month with a "<Month> <Year>" heading.
    Month { year: i32, month: u32 },
    /// All twelve months of a year.
    Year(i32),
}

/// A single day in a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub day: u32,
    pub weekday: Weekday,
    pub is_today: bool,
}

/// One Monday-to-Sunday row of a month grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekRow {
    /// Number shown in the leading "Wk" column.
    pub week_number: u32,
    /// Cells indexed Monday (0) to Sunday (6); `None` outside the month.
    pub days: [Option<DayCell>; 7],
}

/// Calendar data for a single month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub heading: String,
    pub weeks: Vec<WeekRow>,
}

/// Calendar data for a whole year arranged in columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearGrid {
    pub year: i32,
    /// Months per row, always within `1..=MAX_COLUMNS`.
    pub columns: usize,
    pub months: Vec<MonthGrid>,
}

// Constants for calendar formatting
pub const MONTH_WIDTH: usize = 23;
pub const MONTH_MARGIN: usize = 2;
pub const MAX_COLUMNS: usize = 6;
pub const WEEKDAY_HEADING: &str = "Wk Mo Tu We Th Fr Sa Su";

// ANSI color codes
pub const COLOR_RESET: &str = "\x1b[0m";
pub const COLOR_REVERSE: &str = "\x1b[7m";
pub const COLOR_TEAL: &str = "\x1b[96m";
pub const COLOR_SAND_YELLOW: &str = "\x1b[93m";
