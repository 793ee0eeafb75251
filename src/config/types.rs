//! Configuration type definitions

use serde::Deserialize;

/// Which optional checks run
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
pub struct ChecksConfig {
    /// Cross-check logo fields against `asset/{env}/images/`
    #[serde(default)]
    pub check_logo_files: bool,
}

/// Output configuration
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Project configuration (`branding-check.toml`)
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub checks: ChecksConfig,

    #[serde(default)]
    pub output: OutputConfig,
}
