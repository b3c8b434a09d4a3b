use crate::core::io::traits::FormatWrite;
use crate::core::models::atom::QmAtom;
use std::io::{self, Write};

/// The engine's atomic-structure input format (xyz-style).
///
/// First line is the atom count, the second line is blank, then one line
/// per atom holding the element symbol and the coordinates to 6 decimal
/// places. Coordinates stay in the driver's length unit; the engine
/// consumes the structure file in that unit, unlike point charges.
pub struct StructureFile;

impl FormatWrite for StructureFile {
    type Data = [QmAtom];
    type Error = io::Error;

    fn write_to(atoms: &[QmAtom], writer: &mut impl Write) -> io::Result<()> {
        writeln!(writer, "{}", atoms.len())?;
        writeln!(writer)?;
        for atom in atoms {
            writeln!(
                writer,
                "{} {:.6} {:.6} {:.6}",
                atom.element, atom.position.x, atom.position.y, atom.position.z
            )?;
        }
        Ok(())
    }
}
