//! Interactive document-count prompt.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::error::CountInputError;

/// Text shown before reading a count.
pub const COUNT_PROMPT: &str = "Number of quiz sheets to generate: ";

/// Parse one line typed at the prompt into a positive count.
pub fn parse_document_count(input: &str) -> std::result::Result<usize, CountInputError> {
    let trimmed = input.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| CountInputError::NotANumber(trimmed.to_string()))?;
    if value <= 0 {
        return Err(CountInputError::NotPositive);
    }
    usize::try_from(value).map_err(|_| CountInputError::NotANumber(trimmed.to_string()))
}

/// Ask for a document count until a positive integer is entered.
///
/// Each rejected line prints a corrective message and asks again. Returns
/// `Ok(None)` when the input ends before a valid count arrives, which the
/// caller treats as cancellation.
pub fn prompt_document_count<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Option<usize>> {
    let mut line = String::new();
    loop {
        write!(output, "{COUNT_PROMPT}")?;
        output.flush()?;

        line.clear();
        let read = input
            .read_line(&mut line)
            .context("failed to read from standard input")?;
        if read == 0 {
            writeln!(output)?;
            return Ok(None);
        }

        match parse_document_count(&line) {
            Ok(count) => return Ok(Some(count)),
            Err(e) => {
                tracing::debug!("rejected count input: {e}");
                writeln!(output, "{}", corrective_message(&e))?;
            }
        }
    }
}

fn corrective_message(err: &CountInputError) -> &'static str {
    match err {
        CountInputError::NotANumber(_) => "Please enter a valid number.",
        CountInputError::NotPositive => "At least one quiz sheet must be generated.",
    }
}
