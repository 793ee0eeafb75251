//! Configuration module for branding-check
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (BRANDING_CHECK_*)
//! 3. Project config (`{repo_root}/branding-check.toml`)
//! 4. Built-in defaults (lowest priority)
//!
//! The required key and file tables are fixed and cannot be configured.

mod loader;
mod types;

pub use loader::{
    load_for_repo, load_with_warnings, with_env_overrides, ConfigWarning, LoadedConfig,
    CONFIG_FILE_NAME, ENV_COLOR, ENV_LOGO_FILES,
};
pub use types::{ChecksConfig, ColorMode, Config, OutputConfig};
