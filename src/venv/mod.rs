//! Virtual environment management.
//!
//! [`VirtualEnv`] wraps one environment directory with four primitives:
//! an existence check, creation (optionally wiping a previous environment
//! first), installing a single package via the environment's pip, and
//! executing an arbitrary command from the environment's executables
//! directory.

pub mod manager;

pub use manager::VirtualEnv;
