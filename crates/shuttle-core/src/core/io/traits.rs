use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Defines the reading side of a line-oriented exchange format.
///
/// Implementors handle format-specific parsing and return a distinct
/// malformed-input error rather than generic index or conversion errors,
/// so callers can distinguish bad input from a bug.
pub trait FormatRead {
    /// The in-memory representation produced by the parser.
    type Data;

    /// The error type for parse and I/O failures.
    type Error: Error + From<io::Error>;

    /// Reads and parses the format from a buffered reader.
    fn read_from(reader: &mut impl BufRead) -> Result<Self::Data, Self::Error>;

    /// Reads and parses the format from a file path.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self::Data, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }
}

/// Defines the writing side of a line-oriented exchange format.
pub trait FormatWrite {
    /// The in-memory representation the writer serializes.
    type Data: ?Sized;

    /// The error type for I/O failures.
    type Error: Error + From<io::Error>;

    /// Serializes `data` to a writer.
    fn write_to(data: &Self::Data, writer: &mut impl Write) -> Result<(), Self::Error>;

    /// Serializes `data` to a file path.
    fn write_to_path<P: AsRef<Path>>(data: &Self::Data, path: P) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(data, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
