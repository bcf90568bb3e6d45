//! Parser error types.

use thiserror::Error;
use vox_core::CoreError;

/// Errors raised while building an interpreter. Interpreting text never fails.
#[derive(Debug, Error)]
pub enum ParserError {
    /// The supplied lexicon failed validation.
    #[error("Invalid lexicon: {0}")]
    Lexicon(#[from] CoreError),
}

/// Why an `on <month> <day>` phrase did not yield a calendar date.
///
/// Only produced inside the absolute-date branch, where it is logged and
/// treated as "no due date".
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateParseError {
    #[error("unknown month name '{0}'")]
    UnknownMonth(String),

    #[error("'{raw}' is not a valid day of month {month} in {year}")]
    InvalidDay { raw: String, month: u32, year: i32 },
}
