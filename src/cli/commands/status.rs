//! Status command implementation.
//!
//! The `envstrap status` command reports the environment and marker state
//! without touching either.

use std::path::{Path, PathBuf};

use crate::cli::args::StatusArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::platform::{current_platform, PlatformMarker};
use crate::ui::Output;

use super::dispatcher::{Command, CommandResult};

/// The status command implementation.
pub struct StatusCommand {
    project_root: PathBuf,
    #[allow(dead_code)]
    args: StatusArgs,
}

impl StatusCommand {
    /// Create a new status command.
    pub fn new(project_root: &Path, args: StatusArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }
}

impl Command for StatusCommand {
    fn execute(&self, out: &Output) -> Result<CommandResult> {
        let settings = Settings::load(&self.project_root)?;

        let env_path = settings.env_path(&self.project_root);
        let env_exists = env_path.exists();
        out.success(&format!(
            "Environment: {} ({})",
            env_path.display(),
            if env_exists { "present" } else { "absent" }
        ));

        let marker = PlatformMarker::new(settings.marker_path(&self.project_root));
        let platform = current_platform();
        match marker.read()? {
            Some(stored) if stored == platform => {
                out.success(&format!("Platform: {platform} (marker matches)"));
            }
            Some(stored) => {
                out.warning(&format!(
                    "Platform: {platform}, marker says {stored}; next setup will rebuild"
                ));
            }
            None => {
                out.warning("Platform marker not written yet; run 'envstrap setup'");
            }
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::OutputMode;
    use std::fs;
    use tempfile::TempDir;

    fn silent() -> Output {
        Output::new(OutputMode::Silent)
    }

    #[test]
    fn status_succeeds_on_untouched_project() {
        let temp = TempDir::new().unwrap();
        let cmd = StatusCommand::new(temp.path(), StatusArgs::default());
        let result = cmd.execute(&silent()).unwrap();
        assert!(result.success);
    }

    #[test]
    fn status_succeeds_with_marker_and_env() {
        let temp = TempDir::new().unwrap();
        let settings = Settings::default();
        fs::create_dir_all(settings.scratch_path(temp.path())).unwrap();
        fs::write(settings.marker_path(temp.path()), current_platform()).unwrap();
        fs::create_dir_all(settings.env_path(temp.path())).unwrap();

        let cmd = StatusCommand::new(temp.path(), StatusArgs::default());
        let result = cmd.execute(&silent()).unwrap();
        assert!(result.success);
    }
}
