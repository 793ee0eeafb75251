//! branding-check - validate per-environment branding configuration
//!
//! Checks that a mobile/web app repository carries a complete branding
//! setup for each deployment environment: a `{env}.json` file with the
//! required keys and well-formed brand colors, plus the icon, font and
//! splash assets under `asset/{env}/`.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod fs;

// Re-exports for convenience
pub use application::{
    check_environment, CheckEvent, CheckOptions, CheckResult, CheckUseCase, EnvironmentReport,
};
pub use config::{ColorMode, Config};
pub use domain::{EnvSelector, Environment};
pub use error::{BrandingError, BrandingResult};
