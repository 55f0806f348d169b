//! Setup command implementation.
//!
//! The `envstrap setup` command runs the full bootstrap sequence.

use std::path::{Path, PathBuf};

use crate::bootstrap;
use crate::cli::args::SetupArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::shell::ProcessRunner;
use crate::ui::Output;

use super::dispatcher::{Command, CommandResult};

/// The setup command implementation.
pub struct SetupCommand {
    project_root: PathBuf,
    args: SetupArgs,
}

impl SetupCommand {
    /// Create a new setup command.
    pub fn new(project_root: &Path, args: SetupArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    /// Settings for this run: file values overridden by CLI flags.
    fn settings(&self) -> Result<Settings> {
        let mut settings = Settings::load(&self.project_root)?;
        if let Some(python) = &self.args.python {
            settings.python = Some(python.clone());
        }
        if let Some(package_manager) = &self.args.package_manager {
            settings.package_manager = package_manager.clone();
        }
        Ok(settings)
    }
}

impl Command for SetupCommand {
    fn execute(&self, out: &Output) -> Result<CommandResult> {
        let settings = self.settings()?;
        let runner = ProcessRunner;

        let report = bootstrap::run(
            &self.project_root,
            &settings,
            self.args.force,
            &runner,
            out,
        )?;

        if report.install_status.success {
            out.success("Environment ready");
            Ok(CommandResult::success())
        } else {
            // The package manager already reported its own failure on the
            // inherited streams; reflect its exit code.
            out.warning(&format!(
                "{} exited with code {:?}",
                settings.package_manager_bin(),
                report.install_status.code
            ));
            Ok(CommandResult::failure(
                report.install_status.code.unwrap_or(1),
            ))
        }
    }
}
