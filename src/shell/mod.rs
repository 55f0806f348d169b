//! Child process execution.
//!
//! This module provides:
//! - [`CommandRunner`] trait narrowing process execution to
//!   `(program, args) -> exit status`, so commands can be faked in tests
//! - [`ProcessRunner`] spawning real child processes with inherited stdio
//! - [`discover_interpreter`] for locating a Python on PATH

pub mod interpreter;
pub mod runner;

pub use interpreter::discover_interpreter;
pub use runner::{CommandRunner, ProcessRunner, RunStatus};
