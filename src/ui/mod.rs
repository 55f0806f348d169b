//! Terminal output.
//!
//! Envstrap is non-interactive: the only UI surface is status lines. The
//! [`Output`] writer routes them through an [`OutputMode`] so `--quiet`
//! and `--verbose` behave consistently across commands.

pub mod output;

pub use output::{Output, OutputMode};
