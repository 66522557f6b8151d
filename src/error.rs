//! Errors reported by the command line front end.

use std::num::ParseIntError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalError {
    #[error("Invalid year value: {value}")]
    InvalidYear {
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// Year parsed but outside the range chrono can represent.
    #[error("Invalid year value: {0} (out of range)")]
    YearOutOfRange(i32),
}
