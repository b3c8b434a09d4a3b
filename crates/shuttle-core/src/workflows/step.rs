use crate::core::io::charges::ChargesFile;
use crate::core::io::gradient::GradientFile;
use crate::core::io::point_charges::PointChargeFile;
use crate::core::io::result::ResultFile;
use crate::core::io::step::StepFile;
use crate::core::io::structure::StructureFile;
use crate::core::io::traits::{FormatRead, FormatWrite};
use crate::core::models::step::{AtomResult, StepResult};
use crate::core::units;
use crate::engine::config::BridgeConfig;
use crate::engine::error::BridgeError;
use crate::engine::invoke;
use crate::engine::scratch::{ScratchGuard, ScratchLayout};
use nalgebra::Vector3;
use std::fs::File;
use std::path::Path;
use tracing::{info, instrument};

/// What one completed step looked like, for the caller's logging.
#[derive(Debug, Clone, PartialEq)]
pub struct StepSummary {
    pub atoms: usize,
    pub point_charges: usize,
    /// Total energy in the driver's energy unit.
    pub energy: f64,
}

/// Performs one full QM/MM step for the given driver step file.
///
/// The step is strictly sequential: read the driver input, write the
/// engine input, run the engine, translate its output, write the driver
/// result. The five transient engine files are removed on every exit
/// path; the result file is renamed into place only on full success.
#[instrument(skip_all, name = "qmmm_step", fields(step = %step_path.display()))]
pub fn run(config: &BridgeConfig, step_path: &Path) -> Result<StepSummary, BridgeError> {
    // === Phase 1: Scratch layout and region charge ===
    let layout = ScratchLayout::for_step(step_path)?;
    let total_charge =
        config
            .region_charge(layout.region)
            .ok_or(BridgeError::RegionOutOfRange {
                region: layout.region,
                table_len: config.region_charges.len(),
            })?;
    info!(
        "QM region {} (total charge {}) in '{}'",
        layout.region,
        total_charge,
        layout.dir.display()
    );

    // === Phase 2: Driver input ===
    let input = StepFile::read_from_path(step_path)?;
    info!(
        "Read {} atoms and {} point charges",
        input.atoms.len(),
        input.point_charges.len()
    );

    // Armed before the first engine file exists; whatever happens below,
    // the scratch directory ends the step clean.
    let _guard = ScratchGuard::new(&layout);

    // === Phase 3: Engine input ===
    StructureFile::write_to_path(&input.atoms, &layout.structure)?;
    PointChargeFile::write_to_path(&input.point_charges, &layout.point_charges)?;

    // === Phase 4: Engine invocation ===
    let engine_log = File::create(&layout.engine_log)?;
    invoke::run(
        &config.engine_path,
        &layout.structure,
        total_charge,
        &layout.dir,
        engine_log,
    )?;

    // === Phase 5: Engine output ===
    let charges = ChargesFile::read_from_path(&layout.charges)?;
    let gradient = GradientFile::read_from_path(&layout.gradient)?;
    if charges.len() != input.atoms.len() || gradient.gradients.len() != input.atoms.len() {
        return Err(BridgeError::AtomCountMismatch {
            step: input.atoms.len(),
            charges: charges.len(),
            gradients: gradient.gradients.len(),
        });
    }

    let per_atom = charges
        .iter()
        .zip(&gradient.gradients)
        .map(|(&charge, grad)| AtomResult {
            force: Vector3::new(
                units::gradient_to_force(grad.x),
                units::gradient_to_force(grad.y),
                units::gradient_to_force(grad.z),
            ),
            charge,
        })
        .collect();
    let result = StepResult {
        energy: units::energy_to_driver(gradient.energy),
        per_atom,
    };

    // === Phase 6: Driver result ===
    ResultFile::write_atomic(&result, &layout.result)?;
    info!(
        "Wrote '{}' (energy {:.6})",
        layout.result.display(),
        result.energy
    );

    Ok(StepSummary {
        atoms: input.atoms.len(),
        point_charges: input.point_charges.len(),
        energy: result.energy,
    })
}
