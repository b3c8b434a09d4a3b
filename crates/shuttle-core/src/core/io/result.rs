use crate::core::io::traits::FormatWrite;
use crate::core::models::step::StepResult;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// The driver's result-file format: the total energy on the first line,
/// then one `fx fy fz charge` line per atom in input atom order, all to 6
/// decimal places.
pub struct ResultFile;

impl FormatWrite for ResultFile {
    type Data = StepResult;
    type Error = io::Error;

    fn write_to(result: &StepResult, writer: &mut impl Write) -> io::Result<()> {
        writeln!(writer, "{:.6}", result.energy)?;
        for atom in &result.per_atom {
            writeln!(
                writer,
                "{:.6} {:.6} {:.6} {:.6}",
                atom.force.x, atom.force.y, atom.force.z, atom.charge
            )?;
        }
        Ok(())
    }
}

impl ResultFile {
    /// Writes the result to `path` through a temporary sibling file and a
    /// rename, so the driver never observes a partially written result on
    /// any failure path.
    pub fn write_atomic<P: AsRef<Path>>(result: &StepResult, path: P) -> io::Result<()> {
        let path = path.as_ref();
        let file_name = path.file_name().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("result path '{}' has no file name", path.display()),
            )
        })?;
        let mut tmp_name = file_name.to_os_string();
        tmp_name.push(".tmp");
        let tmp_path = path.with_file_name(tmp_name);

        Self::write_to_path(result, &tmp_path)?;
        fs::rename(&tmp_path, path)
    }
}
