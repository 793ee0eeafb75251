//! Application Layer
//!
//! Use cases that orchestrate the domain rules against a real repository on
//! disk.
//!
//! ## Use Cases
//!
//! - `CheckUseCase` - Checks required files and branding JSON per environment

pub mod check;

pub use check::{
    check_environment, CheckEvent, CheckOptions, CheckResult, CheckUseCase, EnvironmentReport,
};
