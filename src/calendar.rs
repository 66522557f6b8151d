//! Calendar calculation logic: weekday offsets, ISO week numbers and grid layout.

use chrono::{Datelike, Month, NaiveDate, Weekday};
use log::debug;

use crate::types::{
    CalContext, DayCell, MAX_COLUMNS, MONTH_MARGIN, MONTH_WIDTH, MonthGrid, WeekRow, YearGrid,
};

/// Check if a year is a Gregorian leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Number of days in `month`, `None` outside 1..=12.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 if is_leap_year(year) => Some(29),
        2 => Some(28),
        _ => None,
    }
}

/// Whether every day of `year` is representable.
pub fn is_supported_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 1, 1).is_some()
        && NaiveDate::from_ymd_opt(year, 12, 31).is_some()
}

pub fn first_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Weekday index with Monday = 1 and Sunday = 7.
pub fn weekday_offset(weekday: Weekday) -> u32 {
    weekday.number_from_monday()
}

/// Number of blank cells before the first day in a Monday-first row.
pub fn leading_blanks(first: NaiveDate) -> usize {
    (weekday_offset(first.weekday()) - 1) as usize
}

/// ISO week number as shown on a row's Monday.
///
/// A Monday whose ISO week belongs to another numbering year (the last days of
/// December that ISO counts as week 1) keeps the year's numbering and shows 53.
pub fn display_week_number(date: NaiveDate) -> u32 {
    let iso = date.iso_week();
    if iso.year() != date.year() {
        53
    } else {
        iso.week()
    }
}

/// English month name, or an empty string for an out-of-range month.
pub fn month_name(month: u32) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
        .unwrap_or("")
}

impl WeekRow {
    fn empty() -> Self {
        WeekRow {
            week_number: 0,
            days: [None; 7],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.days.iter().all(Option::is_none)
    }
}

impl MonthGrid {
    /// Build calendar data for a specific month.
    ///
    /// A month outside 1..=12 yields a grid with no weeks.
    pub fn new(ctx: &CalContext, year: i32, month: u32, heading: impl Into<String>) -> Self {
        let heading = heading.into();
        let (Some(first), Some(days)) = (first_of_month(year, month), days_in_month(year, month))
        else {
            return MonthGrid {
                year,
                month,
                heading,
                weeks: Vec::new(),
            };
        };

        let mut col = leading_blanks(first);
        let cells = col + days as usize;
        let mut weeks = Vec::with_capacity(cells.div_ceil(7));
        let mut row = WeekRow::empty();

        // A row opened mid-week has no Monday to carry its number
        if col > 0 {
            row.week_number = first.iso_week().week();
        }

        for date in first.iter_days().take_while(|d| d.month() == month) {
            if col == 0 {
                row.week_number = display_week_number(date);
            }
            row.days[col] = Some(DayCell {
                day: date.day(),
                weekday: date.weekday(),
                is_today: date == ctx.today,
            });
            col += 1;
            if col == 7 {
                weeks.push(std::mem::replace(&mut row, WeekRow::empty()));
                col = 0;
            }
        }

        if !row.is_empty() {
            weeks.push(row);
        }

        MonthGrid {
            year,
            month,
            heading,
            weeks,
        }
    }

    /// Days of the month in grid order.
    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks.iter().flat_map(|w| w.days.iter().flatten())
    }
}

impl YearGrid {
    /// Build all twelve months of `year`, `columns` months per row.
    pub fn new(ctx: &CalContext, year: i32, columns: usize) -> Self {
        let columns = columns.clamp(1, MAX_COLUMNS);
        let months = (1..=12)
            .map(|month| MonthGrid::new(ctx, year, month, month_name(month)))
            .collect();
        YearGrid {
            year,
            columns,
            months,
        }
    }

    /// Months grouped into display rows, January first.
    pub fn rows(&self) -> std::slice::Chunks<'_, MonthGrid> {
        self.months.chunks(self.columns)
    }

    /// Number of cells marked as today across all months.
    pub fn today_count(&self) -> usize {
        self.months
            .iter()
            .flat_map(|m| m.days())
            .filter(|d| d.is_today)
            .count()
    }
}

/// Months per row that fit into `width` terminal columns, within `1..=MAX_COLUMNS`.
pub fn columns_for_width(width: usize) -> usize {
    (width / (MONTH_WIDTH + MONTH_MARGIN)).clamp(1, MAX_COLUMNS)
}

/// Months per row for the current terminal.
pub fn auto_columns() -> usize {
    let width = get_terminal_width();
    let columns = columns_for_width(width);
    debug!("terminal width {width}, {columns} months per row");
    columns
}

/// Get terminal width using terminal_size crate; 0 when there is no terminal.
fn get_terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(0)
}
