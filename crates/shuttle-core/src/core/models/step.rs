use super::atom::{PointCharge, QmAtom};
use nalgebra::Vector3;

/// The fully parsed contents of one driver step file.
///
/// Holds the quantum atoms and the surrounding point charges for a single
/// QM/MM step, in the order the driver listed them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StepInput {
    /// The quantum-region atoms, in driver order.
    pub atoms: Vec<QmAtom>,
    /// The classical point charges, in driver order.
    pub point_charges: Vec<PointCharge>,
}

/// The per-atom portion of a step result.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomResult {
    /// The force on the atom in the driver's units (energy per length unit).
    pub force: Vector3<f64>,
    /// The partial charge of the atom computed by the engine.
    pub charge: f64,
}

/// The complete result of one QM/MM step, in the driver's units.
///
/// `per_atom` has exactly one entry per quantum atom of the same step, and
/// entry `i` corresponds to atom `i` of the [`StepInput`] atom sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// The total energy of the quantum region in the driver's energy unit.
    pub energy: f64,
    /// Force and partial charge for each atom, in input atom order.
    pub per_atom: Vec<AtomResult>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    #[test]
    fn default_step_input_is_empty() {
        let input = StepInput::default();
        assert!(input.atoms.is_empty());
        assert!(input.point_charges.is_empty());
    }

    #[test]
    fn step_result_preserves_per_atom_order() {
        let result = StepResult {
            energy: -630.0,
            per_atom: vec![
                AtomResult {
                    force: Vector3::new(1.0, 0.0, 0.0),
                    charge: 0.1,
                },
                AtomResult {
                    force: Vector3::new(-1.0, 0.0, 0.0),
                    charge: -0.1,
                },
            ],
        };
        assert_eq!(result.per_atom.len(), 2);
        assert_eq!(result.per_atom[0].charge, 0.1);
        assert_eq!(result.per_atom[1].charge, -0.1);
    }

    #[test]
    fn step_input_holds_atoms_and_charges_independently() {
        let input = StepInput {
            atoms: vec![QmAtom::new("H", Point3::new(0.0, 0.0, 0.0))],
            point_charges: vec![
                PointCharge::new(0.5, Point3::new(0.0, 0.0, 1.0)),
                PointCharge::new(-0.5, Point3::new(0.0, 0.0, 2.0)),
            ],
        };
        assert_eq!(input.atoms.len(), 1);
        assert_eq!(input.point_charges.len(), 2);
    }
}
