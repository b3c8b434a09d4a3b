use nalgebra::Point3;

/// Represents a quantum-region atom as described by the driver's step file.
///
/// Atoms form an ordered sequence, and the order is semantically significant:
/// the index of an atom is the shared index space with the per-atom forces
/// and partial charges returned to the driver, so the sequence must be
/// preserved end-to-end through the whole step.
#[derive(Debug, Clone, PartialEq)]
pub struct QmAtom {
    /// The chemical element symbol (e.g. "H", "O", "Fe").
    pub element: String,
    /// The 3D coordinates in the driver's native length unit.
    pub position: Point3<f64>,
}

impl QmAtom {
    /// Creates a new `QmAtom` from an element symbol and a position.
    pub fn new(element: &str, position: Point3<f64>) -> Self {
        Self {
            element: element.to_string(),
            position,
        }
    }
}

/// Represents a classical point charge from the driver's electrostatic
/// environment of the quantum region.
///
/// Point charges form their own ordered sequence, independent of the atom
/// index space. Positions are stored in Bohr, the unit the engine's
/// point-charge input format expects; the conversion from the driver's
/// length unit happens when the step file is read.
#[derive(Debug, Clone, PartialEq)]
pub struct PointCharge {
    /// The charge magnitude in elementary charge units.
    pub magnitude: f64,
    /// The 3D coordinates in Bohr.
    pub position: Point3<f64>,
}

impl PointCharge {
    /// Creates a new `PointCharge` from a magnitude and a position in Bohr.
    pub fn new(magnitude: f64, position: Point3<f64>) -> Self {
        Self {
            magnitude,
            position,
        }
    }
}
