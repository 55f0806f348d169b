//! Platform identification and the persisted marker file.
//!
//! A virtual environment built on one operating system is not usable on
//! another: the interpreter binary, compiled wheels, and script shebangs are
//! all platform-specific. The marker file records which platform last built
//! the environment so a checkout shared across machines (network mount,
//! dual-boot, synced folder) triggers a clean rebuild instead of failing
//! with broken binaries.

pub mod marker;

pub use marker::PlatformMarker;

/// Identifier of the platform envstrap is currently running on.
///
/// Comparison against the stored marker is plain string inequality, so a
/// renamed identifier forces an unnecessary rebuild rather than reusing a
/// possibly stale environment.
pub fn current_platform() -> &'static str {
    std::env::consts::OS
}
