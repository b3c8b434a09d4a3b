use crate::core::io::traits::FormatWrite;
use crate::core::models::atom::PointCharge;
use std::io::{self, Write};

/// The engine's point-charge input format.
///
/// First line is the charge count, then one line per charge holding the
/// magnitude followed by the position in Bohr, all to 6 decimal places.
/// Note the field order differs from the driver step file: magnitude
/// first, then coordinates.
pub struct PointChargeFile;

impl FormatWrite for PointChargeFile {
    type Data = [PointCharge];
    type Error = io::Error;

    fn write_to(charges: &[PointCharge], writer: &mut impl Write) -> io::Result<()> {
        writeln!(writer, "{}", charges.len())?;
        for charge in charges {
            writeln!(
                writer,
                "{:.6} {:.6} {:.6} {:.6}",
                charge.magnitude, charge.position.x, charge.position.y, charge.position.z
            )?;
        }
        Ok(())
    }
}
