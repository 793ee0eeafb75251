//! Common test utilities for branding-check CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated repo root in a temp directory, plus helpers to run the CLI
//! - Assertion macros: `assert_stdout_contains!`, `assert_stderr_contains!`
//! - Fixtures: a complete, valid branding JSON document

#![allow(dead_code)]

pub mod assertions;
pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
