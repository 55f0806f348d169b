//! End-to-end setup orchestration.
//!
//! One bootstrap run is a linear sequence: ensure the scratch directory,
//! compare the platform marker against the running platform, create the
//! virtual environment (wiping it when the platform changed), install the
//! package manager into it, and hand off dependency installation.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::error::{EnvstrapError, Result};
use crate::platform::{current_platform, PlatformMarker};
use crate::shell::{discover_interpreter, CommandRunner, RunStatus};
use crate::ui::Output;
use crate::venv::VirtualEnv;

/// Outcome of a completed bootstrap run.
#[derive(Debug, Clone, Copy)]
pub struct BootstrapReport {
    /// Whether the stored marker differed from the running platform.
    pub platform_changed: bool,

    /// Whether an existing environment was wiped and rebuilt.
    pub recreated: bool,

    /// Exit status of the final dependency-installation command.
    ///
    /// Reported as-is; a non-zero status here is the package manager's
    /// own verdict, not a bootstrap failure.
    pub install_status: RunStatus,
}

/// Run one bootstrap sequence for the project at `project_root`.
///
/// `force` rebuilds the environment even when the platform matches.
/// Fails fatally when the package manager cannot be installed into the
/// environment; filesystem and spawn errors propagate unwrapped.
pub fn run(
    project_root: &Path,
    settings: &Settings,
    force: bool,
    runner: &dyn CommandRunner,
    out: &Output,
) -> Result<BootstrapReport> {
    let scratch = settings.scratch_path(project_root);
    fs::create_dir_all(&scratch)?;

    let platform = current_platform();
    let marker = PlatformMarker::new(settings.marker_path(project_root));
    let platform_changed = match marker.read()? {
        None => {
            // First run: record the platform, no rebuild message warranted.
            marker.write(platform)?;
            false
        }
        Some(previous) => {
            let changed = previous != platform;
            if changed {
                marker.write(platform)?;
                out.println(&format!(
                    "Environment was built on {previous}, rebuilding for {platform}"
                ));
            }
            changed
        }
    };

    let interpreter = resolve_interpreter(settings)?;
    let env = VirtualEnv::new(settings.env_path(project_root), interpreter, runner);

    let overwrite = platform_changed || force;
    let recreated = overwrite && env.exists();
    env.create(overwrite)?;
    out.detail(&format!("Environment ready at {}", env.path().display()));

    let package = &settings.package_manager;
    out.detail(&format!("Installing {package} into the environment"));
    let status = env.install_package(package)?;
    if !status.success {
        return Err(EnvstrapError::PackageManagerInstallFailed {
            package: package.clone(),
            code: status.code,
        });
    }

    out.println("Pre-installing project dependencies");
    let install_status = env.execute(&settings.package_manager_bin(), &settings.install_args)?;

    Ok(BootstrapReport {
        platform_changed,
        recreated,
        install_status,
    })
}

fn resolve_interpreter(settings: &Settings) -> Result<PathBuf> {
    match &settings.python {
        Some(path) => Ok(path.clone()),
        None => discover_interpreter(),
    }
}
