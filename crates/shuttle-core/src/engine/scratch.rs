use super::error::BridgeError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Atomic-structure input handed to the engine.
const STRUCTURE_FILE: &str = "xtbxyz.xyz";
/// Point-charge input; the engine picks this name up from its working directory.
const POINT_CHARGE_FILE: &str = "pcharge";
/// Per-atom partial charges written by the engine.
const CHARGES_FILE: &str = "charges";
/// Gradient/energy file written by the engine.
const GRADIENT_FILE: &str = "gradient";
/// Restart marker left behind by the engine; it must not survive the step,
/// or the next invocation is treated as a continuation of this one.
const RESTART_FILE: &str = "xtbrestart";
/// Capture of the engine's stdout, kept for post-mortem inspection.
const ENGINE_LOG_FILE: &str = "engine.log";
/// Suffix appended to the step file name to form the driver result file.
const RESULT_SUFFIX: &str = ".result";

/// Fixed file locations of one QM/MM step, all inside the scratch
/// directory the driver created the step file in.
#[derive(Debug, Clone, PartialEq)]
pub struct ScratchLayout {
    /// The scratch directory, exclusively owned by one in-flight step.
    pub dir: PathBuf,
    /// QM region index parsed from the scratch directory name.
    pub region: usize,
    /// Engine structure input (written by the bridge).
    pub structure: PathBuf,
    /// Engine point-charge input (written by the bridge).
    pub point_charges: PathBuf,
    /// Engine charge result (written by the engine).
    pub charges: PathBuf,
    /// Engine gradient/energy result (written by the engine).
    pub gradient: PathBuf,
    /// Engine restart marker (written by the engine).
    pub restart: PathBuf,
    /// Engine stdout capture (written by the bridge).
    pub engine_log: PathBuf,
    /// Driver result file; the only step artifact that survives cleanup.
    pub result: PathBuf,
}

impl ScratchLayout {
    /// Derives the layout from the step-file path supplied by the driver.
    ///
    /// The scratch directory is the step file's parent, and the final
    /// segment of that directory is the QM region index: the driver runs
    /// each QM region in its own numbered directory.
    pub fn for_step(step_path: &Path) -> Result<Self, BridgeError> {
        let dir = match step_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => {
                return Err(BridgeError::RegionFromPath {
                    dir: String::new(),
                });
            }
        };
        let region = dir
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| name.parse::<usize>().ok())
            .ok_or_else(|| BridgeError::RegionFromPath {
                dir: dir.display().to_string(),
            })?;
        let step_name = step_path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                BridgeError::Io(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("step path '{}' has no file name", step_path.display()),
                ))
            })?;

        Ok(Self {
            structure: dir.join(STRUCTURE_FILE),
            point_charges: dir.join(POINT_CHARGE_FILE),
            charges: dir.join(CHARGES_FILE),
            gradient: dir.join(GRADIENT_FILE),
            restart: dir.join(RESTART_FILE),
            engine_log: dir.join(ENGINE_LOG_FILE),
            result: dir.join(format!("{step_name}{RESULT_SUFFIX}")),
            dir,
            region,
        })
    }

    /// The five transient engine files that must not survive the step.
    /// The driver result file and the engine log are not among them.
    pub fn transient_files(&self) -> [&Path; 5] {
        [
            &self.structure,
            &self.point_charges,
            &self.charges,
            &self.gradient,
            &self.restart,
        ]
    }
}

/// Removes the transient engine files when dropped.
///
/// Armed before the first engine file is written, so every exit path of a
/// step leaves the scratch directory free of stale engine state. Missing
/// files are fine; any other removal failure is logged but does not mask
/// the step's own outcome.
pub struct ScratchGuard<'a> {
    layout: &'a ScratchLayout,
}

impl<'a> ScratchGuard<'a> {
    pub fn new(layout: &'a ScratchLayout) -> Self {
        Self { layout }
    }
}

impl Drop for ScratchGuard<'_> {
    fn drop(&mut self) {
        for path in self.layout.transient_files() {
            if let Err(err) = fs::remove_file(path) {
                if err.kind() != io::ErrorKind::NotFound {
                    warn!("Failed to remove scratch file '{}': {}", path.display(), err);
                }
            }
        }
    }
}
