//! Calendar CLI application.
//!
//! # Usage
//! ```ignore
//! cal          // Current month
//! cal 2026     // Year 2026
//! ```

use cal::args::{Args, get_display};
use cal::calendar::auto_columns;
use cal::error::CalError;
use cal::formatter::{print_month, print_year};
use cal::types::{CalContext, DisplayMode};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("cal: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), CalError> {
    let ctx = CalContext::new();
    log::debug!("today is {}, color {}", ctx.today, ctx.color);

    match get_display(args, ctx.today)? {
        DisplayMode::Month { year, month } => print_month(&ctx, year, month),
        DisplayMode::Year(year) => print_year(&ctx, year, auto_columns()),
    }

    Ok(())
}
