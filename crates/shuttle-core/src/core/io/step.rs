use crate::core::io::traits::FormatRead;
use crate::core::models::atom::{PointCharge, QmAtom};
use crate::core::models::step::StepInput;
use crate::core::units;
use nalgebra::Point3;
use std::io::{self, BufRead};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StepError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: StepParseErrorKind,
    },
    #[error("Unexpected end of file: expected {expected} lines, found {found}")]
    Truncated { expected: usize, found: usize },
}

#[derive(Debug, Error)]
pub enum StepParseErrorKind {
    #[error("Invalid integer in {field} field (value: '{value}')")]
    InvalidInt { field: &'static str, value: String },
    #[error("Invalid float in {field} field (value: '{value}')")]
    InvalidFloat { field: &'static str, value: String },
    #[error("Expected at least {expected} whitespace-separated fields, found {found}")]
    FieldCount { expected: usize, found: usize },
}

fn parse_count(value: &str, line: usize, field: &'static str) -> Result<usize, StepError> {
    value.parse().map_err(|_| StepError::Parse {
        line,
        kind: StepParseErrorKind::InvalidInt {
            field,
            value: value.into(),
        },
    })
}

fn parse_float(value: &str, line: usize, field: &'static str) -> Result<f64, StepError> {
    value.parse().map_err(|_| StepError::Parse {
        line,
        kind: StepParseErrorKind::InvalidFloat {
            field,
            value: value.into(),
        },
    })
}

fn fields_of(line: &str, expected: usize, line_num: usize) -> Result<Vec<&str>, StepError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < expected {
        return Err(StepError::Parse {
            line: line_num,
            kind: StepParseErrorKind::FieldCount {
                expected,
                found: fields.len(),
            },
        });
    }
    Ok(fields)
}

/// The driver-format step file: one QM/MM step as written by the
/// molecular-dynamics driver.
///
/// Layout: line 1 holds the atom count `N` and the point-charge count `M`;
/// lines 2..N+1 hold `x y z element` per atom in the driver's length unit;
/// lines N+2..N+M+1 hold `x y z magnitude` per point charge. Point-charge
/// positions are converted to Bohr on read; atom positions are not
/// converted. Exactly `1 + N + M` lines are consumed, trailing extra lines
/// are ignored.
pub struct StepFile;

impl FormatRead for StepFile {
    type Data = StepInput;
    type Error = StepError;

    fn read_from(reader: &mut impl BufRead) -> Result<StepInput, StepError> {
        let mut lines = reader.lines();

        let header = match lines.next() {
            Some(line) => line?,
            None => {
                return Err(StepError::Truncated {
                    expected: 1,
                    found: 0,
                });
            }
        };
        let fields = fields_of(&header, 2, 1)?;
        let atom_count = parse_count(fields[0], 1, "atom count")?;
        let charge_count = parse_count(fields[1], 1, "point charge count")?;
        let expected_lines = 1 + atom_count + charge_count;

        let mut atoms = Vec::with_capacity(atom_count);
        let mut point_charges = Vec::with_capacity(charge_count);

        for i in 0..atom_count {
            let line_num = 2 + i;
            let line = match lines.next() {
                Some(line) => line?,
                None => {
                    return Err(StepError::Truncated {
                        expected: expected_lines,
                        found: line_num - 1,
                    });
                }
            };
            let fields = fields_of(&line, 4, line_num)?;
            let x = parse_float(fields[0], line_num, "x")?;
            let y = parse_float(fields[1], line_num, "y")?;
            let z = parse_float(fields[2], line_num, "z")?;
            atoms.push(QmAtom::new(fields[3], Point3::new(x, y, z)));
        }

        for i in 0..charge_count {
            let line_num = 2 + atom_count + i;
            let line = match lines.next() {
                Some(line) => line?,
                None => {
                    return Err(StepError::Truncated {
                        expected: expected_lines,
                        found: line_num - 1,
                    });
                }
            };
            let fields = fields_of(&line, 4, line_num)?;
            let x = parse_float(fields[0], line_num, "x")?;
            let y = parse_float(fields[1], line_num, "y")?;
            let z = parse_float(fields[2], line_num, "z")?;
            let magnitude = parse_float(fields[3], line_num, "magnitude")?;
            point_charges.push(PointCharge::new(
                magnitude,
                Point3::new(
                    units::length_to_bohr(x),
                    units::length_to_bohr(y),
                    units::length_to_bohr(z),
                ),
            ));
        }

        Ok(StepInput {
            atoms,
            point_charges,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const TOLERANCE: f64 = 1e-9;

    fn read(content: &str) -> Result<StepInput, StepError> {
        StepFile::read_from(&mut Cursor::new(content))
    }

    #[test]
    fn parses_atoms_and_point_charges() {
        let input = read("2 1\n0.0 0.0 0.0 H\n0.0 0.0 1.0 H\n0.0 0.0 2.0 0.5\n").unwrap();

        assert_eq!(input.atoms.len(), 2);
        assert_eq!(input.atoms[0].element, "H");
        assert_eq!(input.atoms[1].position, Point3::new(0.0, 0.0, 1.0));

        assert_eq!(input.point_charges.len(), 1);
        assert_eq!(input.point_charges[0].magnitude, 0.5);
        assert!((input.point_charges[0].position.z - 3.77946).abs() < TOLERANCE);
    }

    #[test]
    fn atom_positions_are_not_converted() {
        let input = read("1 0\n1.0 2.0 3.0 O\n").unwrap();
        assert_eq!(input.atoms[0].position, Point3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn extra_trailing_lines_are_ignored() {
        let input = read("1 0\n0.0 0.0 0.0 H\nthis line is not read\n").unwrap();
        assert_eq!(input.atoms.len(), 1);
        assert!(input.point_charges.is_empty());
    }

    #[test]
    fn empty_file_is_truncated_error() {
        assert!(matches!(
            read(""),
            Err(StepError::Truncated {
                expected: 1,
                found: 0
            })
        ));
    }

    #[test]
    fn missing_atom_lines_are_truncated_error() {
        assert!(matches!(
            read("2 0\n0.0 0.0 0.0 H\n"),
            Err(StepError::Truncated {
                expected: 3,
                found: 2
            })
        ));
    }

    #[test]
    fn missing_point_charge_lines_are_truncated_error() {
        assert!(matches!(
            read("1 1\n0.0 0.0 0.0 H\n"),
            Err(StepError::Truncated {
                expected: 3,
                found: 2
            })
        ));
    }

    #[test]
    fn unparseable_counts_are_fatal() {
        let err = read("two 1\n").unwrap_err();
        assert!(matches!(
            err,
            StepError::Parse {
                line: 1,
                kind: StepParseErrorKind::InvalidInt { field: "atom count", .. },
            }
        ));
    }

    #[test]
    fn short_atom_line_is_fatal() {
        let err = read("1 0\n0.0 0.0 0.0\n").unwrap_err();
        assert!(matches!(
            err,
            StepError::Parse {
                line: 2,
                kind: StepParseErrorKind::FieldCount {
                    expected: 4,
                    found: 3
                },
            }
        ));
    }

    #[test]
    fn round_trip_into_engine_input_formats() {
        use crate::core::io::point_charges::PointChargeFile;
        use crate::core::io::structure::StructureFile;
        use crate::core::io::traits::FormatWrite;

        let input = read("2 1\n0.0 0.0 0.0 H\n0.0 0.0 1.0 H\n0.0 0.0 2.0 0.5\n").unwrap();

        let mut structure = Vec::new();
        StructureFile::write_to(&input.atoms, &mut structure).unwrap();
        assert_eq!(
            String::from_utf8(structure).unwrap(),
            "2\n\nH 0.000000 0.000000 0.000000\nH 0.000000 0.000000 1.000000\n"
        );

        let mut point_charges = Vec::new();
        PointChargeFile::write_to(&input.point_charges, &mut point_charges).unwrap();
        assert_eq!(
            String::from_utf8(point_charges).unwrap(),
            "1\n0.500000 0.000000 0.000000 3.779460\n"
        );
    }

    #[test]
    fn bad_coordinate_reports_line_and_field() {
        let err = read("1 1\n0.0 0.0 0.0 H\n0.0 oops 2.0 0.5\n").unwrap_err();
        assert!(matches!(
            err,
            StepError::Parse {
                line: 3,
                kind: StepParseErrorKind::InvalidFloat { field: "y", .. },
            }
        ));
    }
}
