use crate::core::io::traits::FormatRead;
use std::io::{self, BufRead};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChargesError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid charge value on line {line} (value: '{value}')")]
    InvalidCharge { line: usize, value: String },
    #[error("File contains no charge values")]
    Empty,
}

/// The engine's point-charge result format: one partial charge per
/// non-blank line, one line per quantum atom, in atom order.
///
/// The number of values parsed here is the authoritative engine-side atom
/// count; the caller cross-checks it against the gradient file and the
/// original step input. An engine run that produced nothing is reported as
/// [`ChargesError::Empty`] rather than an empty sequence.
pub struct ChargesFile;

impl FormatRead for ChargesFile {
    type Data = Vec<f64>;
    type Error = ChargesError;

    fn read_from(reader: &mut impl BufRead) -> Result<Vec<f64>, ChargesError> {
        let mut charges = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            let value = trimmed.parse().map_err(|_| ChargesError::InvalidCharge {
                line: idx + 1,
                value: trimmed.into(),
            })?;
            charges.push(value);
        }
        if charges.is_empty() {
            return Err(ChargesError::Empty);
        }
        Ok(charges)
    }
}
