use super::error::BridgeError;
use std::fs::File;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

/// Gradient request flag understood by the engine.
const GRADIENT_FLAG: &str = "-grad";
/// Total-charge flag understood by the engine.
const CHARGE_FLAG: &str = "-charge";

/// Runs the engine for one step and blocks until it exits.
///
/// The engine is started in the scratch directory so its result files and
/// restart marker land next to the structure file. Stdout is redirected
/// into the scratch log, which would otherwise drown the driver's own log;
/// stderr stays attached for engine-internal diagnostics. There is no
/// timeout, retry, or cancellation: an engine that hangs hangs the step.
pub fn run(
    engine_path: &Path,
    structure_file: &Path,
    total_charge: i64,
    working_dir: &Path,
    stdout_log: File,
) -> Result<(), BridgeError> {
    debug!(
        "Invoking '{}' on '{}' with total charge {}",
        engine_path.display(),
        structure_file.display(),
        total_charge
    );
    let status = Command::new(engine_path)
        .arg(structure_file)
        .arg(GRADIENT_FLAG)
        .arg(CHARGE_FLAG)
        .arg(total_charge.to_string())
        .current_dir(working_dir)
        .stdout(Stdio::from(stdout_log))
        .status()
        .map_err(|source| BridgeError::EngineLaunch {
            program: engine_path.to_path_buf(),
            source,
        })?;

    if !status.success() {
        return Err(BridgeError::EngineFailed {
            program: engine_path.to_path_buf(),
            status,
        });
    }
    Ok(())
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::PathBuf;

    fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, format!("#!/bin/sh\n{body}")).unwrap();
        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).unwrap();
        path
    }

    #[test]
    fn passes_arguments_and_captures_stdout() {
        let tmp = tempfile::tempdir().unwrap();
        let engine = write_script(tmp.path(), "engine", "echo \"$@\"\n");
        let log_path = tmp.path().join("engine.log");
        let log = File::create(&log_path).unwrap();

        run(&engine, Path::new("xtbxyz.xyz"), -1, tmp.path(), log).unwrap();

        let captured = fs::read_to_string(&log_path).unwrap();
        assert_eq!(captured.trim(), "xtbxyz.xyz -grad -charge -1");
    }

    #[test]
    fn runs_in_the_scratch_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let engine = write_script(tmp.path(), "engine", "touch marker\n");
        let log = File::create(tmp.path().join("engine.log")).unwrap();

        run(&engine, Path::new("xtbxyz.xyz"), 0, tmp.path(), log).unwrap();

        assert!(tmp.path().join("marker").exists());
    }

    #[test]
    fn nonzero_exit_is_an_engine_failure() {
        let tmp = tempfile::tempdir().unwrap();
        let engine = write_script(tmp.path(), "engine", "exit 7\n");
        let log = File::create(tmp.path().join("engine.log")).unwrap();

        let err = run(&engine, Path::new("xtbxyz.xyz"), 0, tmp.path(), log).unwrap_err();
        match err {
            BridgeError::EngineFailed { status, .. } => assert_eq!(status.code(), Some(7)),
            other => panic!("expected EngineFailed, got {other:?}"),
        }
    }

    #[test]
    fn missing_executable_is_a_launch_failure() {
        let tmp = tempfile::tempdir().unwrap();
        let log = File::create(tmp.path().join("engine.log")).unwrap();

        let err = run(
            Path::new("/nonexistent/engine"),
            Path::new("xtbxyz.xyz"),
            0,
            tmp.path(),
            log,
        )
        .unwrap_err();
        assert!(matches!(err, BridgeError::EngineLaunch { .. }));
    }
}
