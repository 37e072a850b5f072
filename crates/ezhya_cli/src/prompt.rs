//! Validate-or-reprompt console input for the observation date.

use std::io::{BufRead, Write};

use ezhya_time::CalendarDate;
use thiserror::Error;
use tracing::debug;

/// Printed before every read, followed by a newline.
pub const DATE_PROMPT: &str = "Enter observation date (DD-MM-YYYY):";

/// Printed after every rejected line.
pub const FORMAT_HINT: &str = "Incorrect format! Please enter the date in DD-MM-YYYY format.";

/// Errors that end the prompt loop.
#[derive(Debug, Error)]
pub enum PromptError {
    /// Input closed before a valid date was entered.
    #[error("input closed before a valid date was entered")]
    EndOfInput,
    #[error("console I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Prompt until `input` yields a valid `DD-MM-YYYY` date.
///
/// There is no retry limit; only end of input or an I/O error stops the loop.
pub fn read_observation_date<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<CalendarDate, PromptError> {
    let mut line = String::new();
    loop {
        writeln!(output, "{DATE_PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(PromptError::EndOfInput);
        }

        match CalendarDate::parse_dmy(&line) {
            Ok(date) => return Ok(date),
            Err(e) => {
                debug!(input = line.trim(), error = %e, "rejected observation date");
                writeln!(output, "{FORMAT_HINT}")?;
            }
        }
    }
}
