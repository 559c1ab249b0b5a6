use std::io::{BufRead, ErrorKind, Write};

use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Trim `input` and check its length (in characters) is within
/// `[min, max]`. Returns the trimmed slice.
pub fn validate_length(input: &str, min: usize, max: usize) -> Result<&str> {
    let trimmed = input.trim();
    let len = trimmed.chars().count();
    if (min..=max).contains(&len) {
        Ok(trimmed)
    } else {
        Err(Error::InvalidLength { len, min, max })
    }
}

/// Prompt until the user enters a string whose trimmed length is within
/// `[min, max]`. Every rejected line prints an error and prompts again.
///
/// Running out of input while prompting is an `UnexpectedEof` I/O error.
pub fn prompt_valid_string<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    min: usize,
    max: usize,
) -> Result<String> {
    let mut line = String::new();
    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(Error::Io(std::io::Error::new(
                ErrorKind::UnexpectedEof,
                "input closed before a valid string was entered",
            )));
        }

        match validate_length(&line, min, max) {
            Ok(valid) => {
                debug!("Accepted input {:?}", valid);
                return Ok(valid.to_string());
            }
            Err(e) => {
                warn!("Rejected input: {}", e);
                writeln!(
                    output,
                    "Error: Enter a string between {} and {} characters.",
                    min, max
                )?;
            }
        }
    }
}
