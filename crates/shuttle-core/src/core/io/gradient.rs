use crate::core::io::traits::FormatRead;
use nalgebra::Vector3;
use std::io::{self, BufRead};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GradientError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Missing header line")]
    MissingHeader,
    #[error("Missing energy line")]
    MissingEnergy,
    #[error("Energy line has only {found} fields, expected the energy in field 7")]
    EnergyFieldMissing { found: usize },
    #[error("Invalid energy value (value: '{value}')")]
    InvalidEnergy { value: String },
    #[error("Invalid gradient component on line {line} (value: '{value}')")]
    InvalidComponent { line: usize, value: String },
    #[error("Unexpected row on line {line} inside the gradient block")]
    UnexpectedRow { line: usize },
    #[error("Coordinate block lists {coordinates} atoms but {gradients} gradient rows follow")]
    BlockMismatch {
        coordinates: usize,
        gradients: usize,
    },
    #[error("File contains no gradient rows")]
    Empty,
}

/// Raw engine output: the total energy in Hartree and the per-atom
/// gradients in Hartree/Bohr, in atom order. Unit conversion into the
/// driver's conventions happens in the workflow, not here.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientData {
    /// Total energy of the quantum region in Hartree.
    pub energy: f64,
    /// Per-atom gradient in Hartree/Bohr.
    pub gradients: Vec<Vector3<f64>>,
}

/// The engine's gradient/energy result format (Turbomole-style).
///
/// Line 1 is a `$grad` header. Line 2 is the cycle line, whose 7th
/// whitespace field (0-based index 6) holds the energy in Hartree. An
/// echo of the atomic coordinates follows (four fields per line, the last
/// one the element symbol), then one gradient row of three components per
/// atom, then an optional `$end` terminator. Gradient components use the
/// Fortran `D` exponent marker, normalized to `E` before parsing.
///
/// The coordinate echo is detected by its trailing non-numeric field, so
/// files that omit it are read the same way. A coordinate echo whose atom
/// count disagrees with the gradient row count is malformed.
pub struct GradientFile;

fn parse_component(value: &str, line: usize) -> Result<f64, GradientError> {
    let normalized = value.replace(['D', 'd'], "E");
    normalized
        .parse()
        .map_err(|_| GradientError::InvalidComponent {
            line,
            value: value.into(),
        })
}

impl FormatRead for GradientFile {
    type Data = GradientData;
    type Error = GradientError;

    fn read_from(reader: &mut impl BufRead) -> Result<GradientData, GradientError> {
        let mut lines = reader.lines();

        let _header = lines
            .next()
            .transpose()?
            .ok_or(GradientError::MissingHeader)?;
        let energy_line = lines
            .next()
            .transpose()?
            .ok_or(GradientError::MissingEnergy)?;
        let fields: Vec<&str> = energy_line.split_whitespace().collect();
        let raw_energy = fields
            .get(6)
            .ok_or(GradientError::EnergyFieldMissing { found: fields.len() })?;
        let energy = raw_energy
            .parse()
            .map_err(|_| GradientError::InvalidEnergy {
                value: (*raw_energy).into(),
            })?;

        let mut coordinate_rows = 0usize;
        let mut gradients = Vec::new();

        for (idx, line) in lines.enumerate() {
            let line_num = idx + 3;
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if trimmed.starts_with('$') {
                break;
            }
            let fields: Vec<&str> = trimmed.split_whitespace().collect();
            if fields.len() >= 4 && fields[3].parse::<f64>().is_err() {
                // Coordinate echo row; only valid before the gradient block.
                if !gradients.is_empty() {
                    return Err(GradientError::UnexpectedRow { line: line_num });
                }
                coordinate_rows += 1;
                continue;
            }
            if fields.len() < 3 {
                return Err(GradientError::UnexpectedRow { line: line_num });
            }
            let gx = parse_component(fields[0], line_num)?;
            let gy = parse_component(fields[1], line_num)?;
            let gz = parse_component(fields[2], line_num)?;
            gradients.push(Vector3::new(gx, gy, gz));
        }

        if gradients.is_empty() {
            return Err(GradientError::Empty);
        }
        if coordinate_rows != 0 && coordinate_rows != gradients.len() {
            return Err(GradientError::BlockMismatch {
                coordinates: coordinate_rows,
                gradients: gradients.len(),
            });
        }

        Ok(GradientData { energy, gradients })
    }
}
