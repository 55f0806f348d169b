//! Python interpreter discovery.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::error::{EnvstrapError, Result};

/// Interpreter names probed on PATH, in order.
const CANDIDATES: &[&str] = &["python3", "python"];

/// Locate a usable Python interpreter on PATH.
///
/// Probes each candidate with `--version`; the first one that runs and
/// exits successfully wins. Returns [`EnvstrapError::InterpreterNotFound`]
/// when none respond.
pub fn discover_interpreter() -> Result<PathBuf> {
    for candidate in CANDIDATES {
        if probe(candidate) {
            tracing::debug!("Using Python interpreter '{}'", candidate);
            return Ok(PathBuf::from(candidate));
        }
    }

    Err(EnvstrapError::InterpreterNotFound {
        tried: CANDIDATES.join(", "),
    })
}

fn probe(candidate: &str) -> bool {
    Command::new(candidate)
        .arg("--version")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok_and(|s| s.success())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_rejects_missing_binary() {
        assert!(!probe("definitely-not-a-python-interpreter"));
    }

    #[cfg(unix)]
    #[test]
    fn probe_accepts_binary_that_ignores_version_flag() {
        // `true` exits 0 regardless of arguments, which is all probe checks.
        assert!(probe("true"));
    }

    #[test]
    fn discover_error_names_all_candidates() {
        let err = EnvstrapError::InterpreterNotFound {
            tried: CANDIDATES.join(", "),
        };
        let msg = err.to_string();
        assert!(msg.contains("python3"));
        assert!(msg.contains("python"));
    }
}
