//! Settings schema and loading.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{EnvstrapError, Result};

/// Name of the optional settings file at the project root.
pub const SETTINGS_FILE: &str = "envstrap.yml";

/// Resolved settings for one bootstrap run.
///
/// All paths are relative to the project root until resolved through
/// [`Settings::scratch_path`], [`Settings::marker_path`], or
/// [`Settings::env_path`]. Injecting the root at resolution time keeps the
/// whole flow runnable against a temporary directory in tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Scratch directory holding transient bootstrap state.
    pub scratch_dir: PathBuf,

    /// Marker file name inside the scratch directory recording the platform
    /// the environment was last built on.
    pub marker_file: String,

    /// Virtual environment directory.
    pub env_dir: PathBuf,

    /// Package manager installed into the environment via pip.
    ///
    /// The pip package name; the executable invoked afterwards is the
    /// lowercased form (`Poetry` installs, `poetry install` runs).
    pub package_manager: String,

    /// Arguments passed to the package manager for dependency installation.
    pub install_args: Vec<String>,

    /// Python interpreter used to create the environment.
    ///
    /// When unset, `python3` then `python` are probed on PATH.
    pub python: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scratch_dir: PathBuf::from("temp"),
            marker_file: ".platform".to_string(),
            env_dir: PathBuf::from(".venv"),
            package_manager: "Poetry".to_string(),
            install_args: vec!["install".to_string()],
            python: None,
        }
    }
}

impl Settings {
    /// Load settings for a project, falling back to defaults when no
    /// `envstrap.yml` is present.
    pub fn load(project_root: &Path) -> Result<Self> {
        let path = project_root.join(SETTINGS_FILE);

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let settings: Self =
            serde_yaml::from_str(&content).map_err(|e| EnvstrapError::SettingsParseError {
                path: path.clone(),
                message: e.to_string(),
            })?;

        tracing::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Absolute path of the scratch directory.
    pub fn scratch_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.scratch_dir)
    }

    /// Absolute path of the platform marker file.
    pub fn marker_path(&self, project_root: &Path) -> PathBuf {
        self.scratch_path(project_root).join(&self.marker_file)
    }

    /// Absolute path of the virtual environment directory.
    pub fn env_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.env_dir)
    }

    /// Executable name of the package manager.
    pub fn package_manager_bin(&self) -> String {
        self.package_manager.to_lowercase()
    }
}
