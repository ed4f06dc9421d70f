//! Line-oriented input validation for the console loop.
//!
//! Every prompt follows the same contract: print the pending error message
//! (if any), print the label, read one line. Blank input is rejected and
//! re-prompted no matter which parser is in play, and there is no retry cap.
//! All retry loops are iterative.

use std::io::{BufRead, Write};
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::dto::round_4dp;
use crate::Error;

const INVALID_INPUT: &str = "Invalid input. Try again.";

/// Input date format: day.month.year, single digits accepted (`3.4.2019`).
const DATE_FORMAT: &str = "%d.%m.%Y";

/// Reads one non-blank line, printing `error` (when set) before the label.
/// Re-prompts on blank input; a closed input stream is an error.
pub fn read_value<R, W>(
    input: &mut R,
    output: &mut W,
    label: &str,
    error: Option<&str>,
) -> Result<String, Error>
where
    R: BufRead,
    W: Write,
{
    let mut error = error;
    loop {
        if let Some(message) = error {
            writeln!(output, "{message}")?;
        }
        writeln!(output, "{label}")?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(Error::InputClosed);
        }

        let value = line.trim();
        if value.is_empty() {
            error = Some(INVALID_INPUT);
            continue;
        }
        return Ok(value.to_owned());
    }
}

/// Repeats [`read_value`] until `parse` accepts the input, printing the
/// parser-specific `error` before each retry.
pub fn read_parsed<T, R, W, F>(
    input: &mut R,
    output: &mut W,
    label: &str,
    error: &str,
    parse: F,
) -> Result<T, Error>
where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> Option<T>,
{
    let mut failed = false;
    loop {
        let raw = read_value(input, output, label, failed.then_some(error))?;
        match parse(&raw) {
            Some(value) => return Ok(value),
            None => failed = true,
        }
    }
}

pub fn parse_id(value: &str) -> Option<u32> {
    u32::from_str(value).ok()
}

pub fn parse_amount(value: &str) -> Option<Decimal> {
    Decimal::from_str(value).ok().map(round_4dp)
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}
