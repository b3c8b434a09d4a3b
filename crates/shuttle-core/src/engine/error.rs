use crate::core::io::charges::ChargesError;
use crate::core::io::gradient::GradientError;
use crate::core::io::step::StepError;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Errors of one QM/MM step. All of them are fatal to the step: one step
/// cannot be partially computed, nothing is retried, and no partial
/// driver output is written.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("Malformed driver step file: {0}")]
    Step(#[from] StepError),

    #[error("Scratch directory '{dir}' does not name a QM region index")]
    RegionFromPath { dir: String },

    #[error("QM region {region} is outside the charge table ({table_len} entries)")]
    RegionOutOfRange { region: usize, table_len: usize },

    #[error("Failed to launch engine '{}': {source}", program.display())]
    EngineLaunch {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Engine '{}' exited with {status}", program.display())]
    EngineFailed {
        program: PathBuf,
        status: ExitStatus,
    },

    #[error("Malformed engine charge file: {0}")]
    Charges(#[from] ChargesError),

    #[error("Malformed engine gradient file: {0}")]
    Gradient(#[from] GradientError),

    #[error(
        "Atom count mismatch: step file has {step} atoms, engine returned {charges} charges and {gradients} gradients"
    )]
    AtomCountMismatch {
        step: usize,
        charges: usize,
        gradients: usize,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
