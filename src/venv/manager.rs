//! Virtual environment wrapper.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{EnvstrapError, Result};
use crate::shell::{CommandRunner, RunStatus};

/// Directory inside the environment holding installed executables.
#[cfg(not(windows))]
const BIN_DIR: &str = "bin";
#[cfg(windows)]
const BIN_DIR: &str = "Scripts";

/// Handle to a virtual environment at a fixed path.
///
/// Stateless per call: every operation re-derives what it needs from the
/// filesystem, so a handle stays valid across create/wipe cycles.
pub struct VirtualEnv<'a> {
    path: PathBuf,
    interpreter: PathBuf,
    runner: &'a dyn CommandRunner,
}

impl<'a> VirtualEnv<'a> {
    /// Create a handle for the environment at `path`, built with
    /// `interpreter` and running children through `runner`.
    pub fn new(
        path: impl Into<PathBuf>,
        interpreter: impl Into<PathBuf>,
        runner: &'a dyn CommandRunner,
    ) -> Self {
        Self {
            path: path.into(),
            interpreter: interpreter.into(),
            runner,
        }
    }

    /// Environment root path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the environment directory is present on the filesystem.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Directory holding the environment's executables.
    pub fn bin_dir(&self) -> PathBuf {
        self.path.join(BIN_DIR)
    }

    /// Create the environment, optionally wiping an existing one first.
    ///
    /// With `overwrite`, an existing environment is recursively deleted
    /// before recreation. Without it, an existing environment is left
    /// untouched (idempotent no-op). Creation delegates to the host
    /// Python's `venv` module, which enables pip in the new environment.
    pub fn create(&self, overwrite: bool) -> Result<()> {
        if overwrite && self.exists() {
            tracing::debug!("Removing existing environment at {}", self.path.display());
            fs::remove_dir_all(&self.path)?;
        }

        if self.exists() {
            return Ok(());
        }

        let status = self.runner.run(
            &self.interpreter,
            &[
                "-m".to_string(),
                "venv".to_string(),
                self.path.display().to_string(),
            ],
        )?;

        if !status.success {
            return Err(EnvstrapError::VenvCreateFailed {
                path: self.path.clone(),
                code: status.code,
            });
        }

        Ok(())
    }

    /// Install a single package into the environment via its pip.
    pub fn install_package(&self, package: &str) -> Result<RunStatus> {
        self.execute("pip", &["install".to_string(), package.to_string()])
    }

    /// Execute a command from the environment's executables directory.
    ///
    /// Blocks until the child exits and returns its status; stdio is
    /// inherited from the parent.
    pub fn execute(&self, command: &str, args: &[String]) -> Result<RunStatus> {
        let program = self.bin_dir().join(executable_name(command));
        self.runner.run(&program, args)
    }
}

#[cfg(not(windows))]
fn executable_name(command: &str) -> String {
    command.to_string()
}

#[cfg(windows)]
fn executable_name(command: &str) -> String {
    format!("{command}.exe")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use tempfile::TempDir;

    /// Fake runner recording every invocation and replying with a fixed status.
    struct FakeRunner {
        calls: RefCell<Vec<(PathBuf, Vec<String>)>>,
        status: RunStatus,
    }

    impl FakeRunner {
        fn replying(status: RunStatus) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                status,
            }
        }

        fn calls(&self) -> Vec<(PathBuf, Vec<String>)> {
            self.calls.borrow().clone()
        }
    }

    impl CommandRunner for FakeRunner {
        fn run(&self, program: &Path, args: &[String]) -> Result<RunStatus> {
            self.calls
                .borrow_mut()
                .push((program.to_path_buf(), args.to_vec()));
            Ok(self.status)
        }
    }

    #[test]
    fn exists_reflects_filesystem() {
        let temp = TempDir::new().unwrap();
        let runner = FakeRunner::replying(RunStatus::from_code(0));
        let env = VirtualEnv::new(temp.path().join(".venv"), "python3", &runner);

        assert!(!env.exists());
        fs::create_dir(env.path()).unwrap();
        assert!(env.exists());
    }

    #[test]
    fn create_invokes_venv_module() {
        let temp = TempDir::new().unwrap();
        let runner = FakeRunner::replying(RunStatus::from_code(0));
        let env = VirtualEnv::new(temp.path().join(".venv"), "python3", &runner);

        env.create(false).unwrap();

        let calls = runner.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, PathBuf::from("python3"));
        assert_eq!(calls[0].1[0], "-m");
        assert_eq!(calls[0].1[1], "venv");
    }

    #[test]
    fn create_without_overwrite_is_noop_on_existing_env() {
        let temp = TempDir::new().unwrap();
        let env_path = temp.path().join(".venv");
        fs::create_dir(&env_path).unwrap();

        let runner = FakeRunner::replying(RunStatus::from_code(0));
        let env = VirtualEnv::new(&env_path, "python3", &runner);

        env.create(false).unwrap();

        assert!(runner.calls().is_empty());
        assert!(env_path.exists());
    }

    #[test]
    fn create_with_overwrite_wipes_existing_env() {
        let temp = TempDir::new().unwrap();
        let env_path = temp.path().join(".venv");
        fs::create_dir(&env_path).unwrap();
        fs::write(env_path.join("stale"), "old artifact").unwrap();

        let runner = FakeRunner::replying(RunStatus::from_code(0));
        let env = VirtualEnv::new(&env_path, "python3", &runner);

        env.create(true).unwrap();

        // Wiped before the (faked) recreation ran.
        assert!(!env_path.join("stale").exists());
        assert_eq!(runner.calls().len(), 1);
    }

    #[test]
    fn create_surfaces_nonzero_venv_exit() {
        let temp = TempDir::new().unwrap();
        let runner = FakeRunner::replying(RunStatus::from_code(1));
        let env = VirtualEnv::new(temp.path().join(".venv"), "python3", &runner);

        let err = env.create(false).unwrap_err();
        assert!(matches!(err, EnvstrapError::VenvCreateFailed { .. }));
    }

    #[test]
    fn install_package_delegates_to_pip() {
        let temp = TempDir::new().unwrap();
        let runner = FakeRunner::replying(RunStatus::from_code(0));
        let env = VirtualEnv::new(temp.path().join(".venv"), "python3", &runner);

        let status = env.install_package("Poetry").unwrap();
        assert!(status.success);

        let calls = runner.calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].0.ends_with(Path::new(BIN_DIR).join(executable_name("pip"))));
        assert_eq!(calls[0].1, vec!["install".to_string(), "Poetry".to_string()]);
    }

    #[test]
    fn install_package_returns_child_status_unmodified() {
        let temp = TempDir::new().unwrap();
        let runner = FakeRunner::replying(RunStatus::from_code(4));
        let env = VirtualEnv::new(temp.path().join(".venv"), "python3", &runner);

        let status = env.install_package("Poetry").unwrap();
        assert!(!status.success);
        assert_eq!(status.code, Some(4));
    }

    #[test]
    fn execute_resolves_command_under_bin_dir() {
        let temp = TempDir::new().unwrap();
        let env_path = temp.path().join(".venv");
        let runner = FakeRunner::replying(RunStatus::from_code(0));
        let env = VirtualEnv::new(&env_path, "python3", &runner);

        env.execute("poetry", &["install".to_string()]).unwrap();

        let calls = runner.calls();
        assert_eq!(
            calls[0].0,
            env_path.join(BIN_DIR).join(executable_name("poetry"))
        );
    }
}
