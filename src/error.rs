//! Error types for envstrap operations.
//!
//! This module defines [`EnvstrapError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `EnvstrapError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `EnvstrapError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for envstrap operations.
#[derive(Debug, Error)]
pub enum EnvstrapError {
    /// Failed to parse the settings file.
    #[error("Failed to parse settings at {path}: {message}")]
    SettingsParseError { path: PathBuf, message: String },

    /// No usable Python interpreter found on PATH.
    #[error("No Python interpreter found (tried {tried}). Install Python or set 'python' in envstrap.yml")]
    InterpreterNotFound { tried: String },

    /// Virtual environment creation command exited non-zero.
    #[error("Failed to create virtual environment at {path} (exit code {code:?})")]
    VenvCreateFailed { path: PathBuf, code: Option<i32> },

    /// Package manager installation into the environment exited non-zero.
    #[error("Failed to install {package} (exit code {code:?})")]
    PackageManagerInstallFailed { package: String, code: Option<i32> },

    /// A child process could not be spawned.
    #[error("Command failed to start: {command}: {message}")]
    CommandSpawnFailed { command: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for envstrap operations.
pub type Result<T> = std::result::Result<T, EnvstrapError>;
