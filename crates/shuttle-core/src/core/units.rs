//! Unit conversion between the driver's conventions and the engine's
//! atomic units.
//!
//! The driver works in its native length unit (Angstrom) and energy unit
//! (kcal/mol); the engine consumes point-charge positions in Bohr and
//! produces energies in Hartree and gradients in Hartree/Bohr.

/// Conversion factor from the driver's length unit to Bohr.
pub const LENGTH_TO_BOHR: f64 = 1.88973;

/// Conversion factor from Hartree to the driver's energy unit.
///
/// The driver protocol historically uses this rounded Hartree-to-kcal/mol
/// factor; it is kept verbatim so energies match what the driver expects.
pub const HARTREE_TO_DRIVER_ENERGY: f64 = 630.0;

/// Converts a length in the driver's unit to Bohr.
pub fn length_to_bohr(value: f64) -> f64 {
    value * LENGTH_TO_BOHR
}

/// Converts an engine energy in Hartree to the driver's energy unit.
pub fn energy_to_driver(hartree: f64) -> f64 {
    hartree * HARTREE_TO_DRIVER_ENERGY
}

/// Converts an engine gradient component in Hartree/Bohr to a force
/// component in the driver's units.
///
/// The force is the negated gradient, combined with the Hartree-to-driver
/// energy factor and the per-Bohr to per-length-unit factor.
pub fn gradient_to_force(gradient: f64) -> f64 {
    -HARTREE_TO_DRIVER_ENERGY * LENGTH_TO_BOHR * gradient
}
