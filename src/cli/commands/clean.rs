//! Clean command implementation.
//!
//! The `envstrap clean` command removes the virtual environment and the
//! platform marker so the next setup starts from scratch.

use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::args::CleanArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::ui::Output;

use super::dispatcher::{Command, CommandResult};

/// The clean command implementation.
pub struct CleanCommand {
    project_root: PathBuf,
    args: CleanArgs,
}

impl CleanCommand {
    /// Create a new clean command.
    pub fn new(project_root: &Path, args: CleanArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }
}

impl Command for CleanCommand {
    fn execute(&self, out: &Output) -> Result<CommandResult> {
        let settings = Settings::load(&self.project_root)?;

        let env_path = settings.env_path(&self.project_root);
        if env_path.exists() {
            fs::remove_dir_all(&env_path)?;
            out.success(&format!("Removed {}", env_path.display()));
        }

        let marker_path = settings.marker_path(&self.project_root);
        if marker_path.exists() {
            fs::remove_file(&marker_path)?;
            out.success(&format!("Removed {}", marker_path.display()));
        }

        if self.args.scratch {
            let scratch = settings.scratch_path(&self.project_root);
            if scratch.exists() {
                fs::remove_dir_all(&scratch)?;
                out.success(&format!("Removed {}", scratch.display()));
            }
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::OutputMode;
    use tempfile::TempDir;

    fn silent() -> Output {
        Output::new(OutputMode::Silent)
    }

    #[test]
    fn clean_on_untouched_project_is_noop() {
        let temp = TempDir::new().unwrap();
        let cmd = CleanCommand::new(temp.path(), CleanArgs::default());
        let result = cmd.execute(&silent()).unwrap();
        assert!(result.success);
    }

    #[test]
    fn clean_removes_env_and_marker() {
        let temp = TempDir::new().unwrap();
        let settings = Settings::default();
        fs::create_dir_all(settings.scratch_path(temp.path())).unwrap();
        fs::write(settings.marker_path(temp.path()), "linux").unwrap();
        fs::create_dir_all(settings.env_path(temp.path()).join("bin")).unwrap();

        let cmd = CleanCommand::new(temp.path(), CleanArgs::default());
        cmd.execute(&silent()).unwrap();

        assert!(!settings.env_path(temp.path()).exists());
        assert!(!settings.marker_path(temp.path()).exists());
        // Scratch stays unless asked for.
        assert!(settings.scratch_path(temp.path()).exists());
    }

    #[test]
    fn clean_scratch_removes_scratch_directory() {
        let temp = TempDir::new().unwrap();
        let settings = Settings::default();
        fs::create_dir_all(settings.scratch_path(temp.path())).unwrap();
        fs::write(settings.marker_path(temp.path()), "linux").unwrap();

        let cmd = CleanCommand::new(temp.path(), CleanArgs { scratch: true });
        cmd.execute(&silent()).unwrap();

        assert!(!settings.scratch_path(temp.path()).exists());
    }
}
