//! Configuration module for treeselect
//!
//! A control is configured from (highest priority first):
//! 1. Builder calls on [`ControlConfig`]
//! 2. A config file (`.toml` or `.json`)
//! 3. Built-in defaults (empty data, every flag disabled)

mod loader;
mod types;

pub use loader::{load_with_warnings, parse_with_warnings, ConfigFormat, ConfigWarning};
pub use types::{ControlConfig, Flag, Flags, DEFAULT_PLACEHOLDER};
