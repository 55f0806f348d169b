//! Envstrap - Python virtual environment bootstrap automation.
//!
//! Envstrap replaces ad-hoc `scripts/setup_virtual_env.py` bootstrap scripts
//! with a single binary that creates a project virtual environment, detects
//! when the checkout has moved between platforms (forcing a clean rebuild),
//! installs a package manager into the environment, and hands off dependency
//! installation to it.
//!
//! # Modules
//!
//! - [`bootstrap`] - End-to-end setup orchestration
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Settings loading and path resolution
//! - [`error`] - Error types and result aliases
//! - [`platform`] - Platform identification and the persisted marker file
//! - [`shell`] - Child process execution
//! - [`ui`] - Terminal output
//! - [`venv`] - Virtual environment management
//!
//! # Example
//!
//! ```
//! use envstrap::config::Settings;
//! use std::path::Path;
//!
//! let settings = Settings::default();
//! assert_eq!(settings.env_path(Path::new("/project")), Path::new("/project/.venv"));
//! ```

pub mod bootstrap;
pub mod cli;
pub mod config;
pub mod error;
pub mod platform;
pub mod shell;
pub mod ui;
pub mod venv;

pub use error::{EnvstrapError, Result};
