//! Calendar formatting and display with color support.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::calendar::month_name;
use crate::types::{
    COLOR_RESET, COLOR_REVERSE, COLOR_SAND_YELLOW, COLOR_TEAL, CalContext, DayCell, MONTH_MARGIN,
    MONTH_WIDTH, MonthGrid, WEEKDAY_HEADING, WeekRow, YearGrid,
};

/// Center text within a specified width, accounting for Unicode character widths.
///
/// Odd padding puts the extra space on the right.
pub fn center_text(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width >= width {
        return text.to_string();
    }
    let total_padding = width - text_width;
    let left_padding = total_padding / 2;
    let right_padding = total_padding - left_padding;
    format!(
        "{}{}{}",
        " ".repeat(left_padding),
        text,
        " ".repeat(right_padding)
    )
}

/// Word-wrap `text` into lines at most `width` columns wide.
///
/// Words wider than `width` are split across lines.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        for piece in split_word(word, width) {
            if line.is_empty() {
                line = piece;
            } else if line.width() + 1 + piece.width() <= width {
                line.push(' ');
                line.push_str(&piece);
            } else {
                lines.push(std::mem::replace(&mut line, piece));
            }
        }
    }
    if !line.is_empty() || lines.is_empty() {
        lines.push(line);
    }
    lines
}

fn split_word(word: &str, width: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();
    for c in word.chars() {
        let char_width = c.width().unwrap_or(0);
        if !piece.is_empty() && piece.width() + char_width > width {
            pieces.push(std::mem::take(&mut piece));
        }
        piece.push(c);
    }
    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}

/// Format month heading centered over the month block, wrapped to its width.
pub fn format_month_header(heading: &str, color: bool) -> Vec<String> {
    wrap_text(heading, MONTH_WIDTH)
        .iter()
        .map(|line| {
            let centered = center_text(line, MONTH_WIDTH);
            if color {
                format!("{}{}{}", COLOR_TEAL, centered, COLOR_RESET)
            } else {
                centered
            }
        })
        .collect()
}

pub fn format_weekday_headers(color: bool) -> String {
    if color {
        format!("{}{}{}", COLOR_SAND_YELLOW, WEEKDAY_HEADING, COLOR_RESET)
    } else {
        WEEKDAY_HEADING.to_string()
    }
}

/// Format day cell, reversed when it is today.
pub fn format_day(ctx: &CalContext, cell: &DayCell) -> String {
    let day_str = format!("{:>2}", cell.day);
    if ctx.color && cell.is_today {
        format!("{}{}{}", COLOR_REVERSE, day_str, COLOR_RESET)
    } else {
        day_str
    }
}

/// Format one week as `Wk` followed by seven day cells.
pub fn format_week_row(ctx: &CalContext, row: &WeekRow) -> String {
    let mut line = format!("{:>2}", row.week_number);
    for cell in &row.days {
        line.push(' ');
        match cell {
            Some(cell) => line.push_str(&format_day(ctx, cell)),
            None => line.push_str("  "),
        }
    }
    line
}

/// Format month as grid of lines, each `MONTH_WIDTH` visible columns wide.
pub fn format_month_grid(ctx: &CalContext, month: &MonthGrid) -> Vec<String> {
    let mut lines = Vec::with_capacity(month.weeks.len() + 2);
    lines.extend(format_month_header(&month.heading, ctx.color));
    lines.push(format_weekday_headers(ctx.color));
    lines.extend(month.weeks.iter().map(|w| format_week_row(ctx, w)));
    lines
}

pub fn render_month(ctx: &CalContext, year: i32, month: u32, heading: &str) -> String {
    let grid = MonthGrid::new(ctx, year, month, heading);
    format_month_grid(ctx, &grid).join("\n")
}

/// Join month blocks side by side, top-aligned, each followed by the margin.
pub fn join_months(ctx: &CalContext, months: &[MonthGrid]) -> String {
    let blocks: Vec<Vec<String>> = months.iter().map(|m| format_month_grid(ctx, m)).collect();
    let height = blocks.iter().map(Vec::len).max().unwrap_or(0);
    let blank = " ".repeat(MONTH_WIDTH);
    let margin = " ".repeat(MONTH_MARGIN);

    // Block lines are already MONTH_WIDTH wide, so only missing lines need filling
    let lines: Vec<String> = (0..height)
        .map(|row| {
            blocks
                .iter()
                .map(|block| format!("{}{}", block.get(row).unwrap_or(&blank), margin))
                .collect()
        })
        .collect();
    lines.join("\n")
}

/// Render the year heading followed by its rows of months.
pub fn format_year_grid(ctx: &CalContext, grid: &YearGrid) -> String {
    debug_assert!(grid.today_count() <= 1, "more than one day marked today");
    let heading_width = (MONTH_WIDTH + MONTH_MARGIN - 1) * grid.columns;
    let mut res = center_text(&grid.year.to_string(), heading_width);
    for row in grid.rows() {
        res.push('\n');
        res.push_str(&join_months(ctx, row));
        res.push('\n');
    }
    res.trim_end_matches([' ', '\n']).to_string()
}

pub fn render_year(ctx: &CalContext, year: i32, columns: usize) -> String {
    format_year_grid(ctx, &YearGrid::new(ctx, year, columns))
}

/// Print single month with a "<Month> <Year>" heading.
pub fn print_month(ctx: &CalContext, year: i32, month: u32) {
    let heading = format!("{} {}", month_name(month), year);
    println!("{}", render_month(ctx, year, month, &heading));
}

/// Print all 12 months of a year.
pub fn print_year(ctx: &CalContext, year: i32, columns: usize) {
    println!("{}", render_year(ctx, year, columns));
}
