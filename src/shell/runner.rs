//! Command runner abstraction.

use std::path::Path;
use std::process::Command;

use crate::error::{EnvstrapError, Result};

/// Exit status of a finished child process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStatus {
    /// Exit code (None if killed by signal).
    pub code: Option<i32>,

    /// Whether the child exited with code 0.
    pub success: bool,
}

impl RunStatus {
    /// Status for a child that exited with `code`.
    pub fn from_code(code: i32) -> Self {
        Self {
            code: Some(code),
            success: code == 0,
        }
    }

    /// Status for a child killed by a signal.
    pub fn signalled() -> Self {
        Self {
            code: None,
            success: false,
        }
    }
}

impl From<std::process::ExitStatus> for RunStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        Self {
            code: status.code(),
            success: status.success(),
        }
    }
}

/// Narrow interface over synchronous child process execution.
///
/// Every external command envstrap runs goes through this trait, so the
/// whole bootstrap flow can be exercised in tests with a fake that never
/// spawns anything.
pub trait CommandRunner {
    /// Spawn `program` with `args`, wait for termination, and return its
    /// exit status.
    ///
    /// The child inherits the parent's standard streams; there is no
    /// timeout and no output capture. Spawn failures (missing executable,
    /// permission denied) surface as errors rather than statuses.
    fn run(&self, program: &Path, args: &[String]) -> Result<RunStatus>;
}

/// [`CommandRunner`] backed by [`std::process::Command`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, program: &Path, args: &[String]) -> Result<RunStatus> {
        tracing::debug!("Running {} {}", program.display(), args.join(" "));

        let status = Command::new(program)
            .args(args)
            .status()
            .map_err(|e| EnvstrapError::CommandSpawnFailed {
                command: program.display().to_string(),
                message: e.to_string(),
            })?;

        tracing::debug!("{} exited with {:?}", program.display(), status.code());
        Ok(status.into())
    }
}
