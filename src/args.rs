//! Command-line argument parsing using clap.
//!
//! Arguments: `cal [year]`

use chrono::Datelike;
use clap::{Parser, ValueHint};
use std::io::IsTerminal;

use crate::calendar::is_supported_year;
use crate::error::CalError;
use crate::types::{CalContext, DisplayMode};

#[derive(Parser, Debug)]
#[command(name = "cal")]
#[command(about = "Displays calendar for the current month or a whole year", long_about = None)]
#[command(version)]
#[command(after_help = HELP_MESSAGE)]
pub struct Args {
    /// Year to display as a grid of twelve months.
    #[arg(
        index = 1,
        value_name = "year",
        allow_negative_numbers = true,
        value_hint = ValueHint::Other
    )]
    pub year_arg: Option<String>,
}

/// Help message displayed with --help.
const HELP_MESSAGE: &str = "Without any arguments, display the current month.

Months are laid out in as many columns as the terminal fits (at most 6).

Examples:
  cal                Display current month
  cal 2026           Display year 2026";

impl Args {
    pub fn parse() -> Self {
        Parser::parse()
    }
}

impl CalContext {
    pub fn new() -> Self {
        CalContext {
            today: get_today_date(),
            color: std::io::stdout().is_terminal(),
        }
    }
}

impl Default for CalContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Get today's date, respecting CAL_TEST_TIME environment variable for testing.
pub fn get_today_date() -> chrono::NaiveDate {
    if let Ok(test_time) = std::env::var("CAL_TEST_TIME")
        && let Ok(date) = chrono::NaiveDate::parse_from_str(&test_time, "%Y-%m-%d")
    {
        return date;
    }
    chrono::Local::now().date_naive()
}

/// Decide what to display from positional arguments.
///
/// - no args: the month containing `today`
/// - 1 arg: integer year
pub fn get_display(args: &Args, today: chrono::NaiveDate) -> Result<DisplayMode, CalError> {
    let Some(value) = args.year_arg.as_deref() else {
        return Ok(DisplayMode::Month {
            year: today.year(),
            month: today.month(),
        });
    };

    let year: i32 = value.parse().map_err(|source| CalError::InvalidYear {
        value: value.to_string(),
        source,
    })?;
    if !is_supported_year(year) {
        return Err(CalError::YearOutOfRange(year));
    }
    Ok(DisplayMode::Year(year))
}
