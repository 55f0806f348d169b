//! Settings loading and path resolution.
//!
//! Envstrap works without any configuration: every path and tool name has a
//! default mirroring the conventional project layout (`temp/.platform`,
//! `.venv`, Poetry). An optional `envstrap.yml` at the project root
//! overrides individual fields.

pub mod settings;

pub use settings::{Settings, SETTINGS_FILE};
