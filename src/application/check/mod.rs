//! Check Use Case
//!
//! Builds one [`EnvironmentReport`] per selected environment: required asset
//! files first, then the branding JSON.

mod files;
mod json;
mod report;

use std::path::{Path, PathBuf};

use crate::domain::{EnvSelector, Environment};
use crate::error::BrandingResult;

pub use files::{check_logo_files, check_required_files};
pub use json::{check_colors, check_json, check_required_keys};
pub use report::{CheckResult, EnvironmentReport};

/// Options for the check operation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckOptions {
    /// Which environment(s) to check
    pub envs: EnvSelector,
    /// Cross-check logo fields against `asset/{env}/images/`
    pub check_logo_files: bool,
}

/// Progress notifications emitted while checking
#[derive(Debug, Clone, Copy)]
pub enum CheckEvent<'a> {
    /// About to check an environment
    Started(Environment),
    /// Environment fully checked
    Finished(&'a EnvironmentReport),
}

/// Build the report for a single environment
pub fn check_environment(
    repo_root: &Path,
    env: Environment,
    check_logos: bool,
) -> BrandingResult<EnvironmentReport> {
    let mut report = EnvironmentReport::new(env);
    report.missing_files = check_required_files(repo_root, env)?;
    report.issues = check_json(repo_root, env, check_logos)?;
    Ok(report)
}

/// Check Use Case
///
/// Runs every selected environment against one repository root.
pub struct CheckUseCase {
    repo_root: PathBuf,
}

impl CheckUseCase {
    pub fn new(repo_root: impl Into<PathBuf>) -> Self {
        Self {
            repo_root: repo_root.into(),
        }
    }

    pub fn repo_root(&self) -> &Path {
        &self.repo_root
    }

    /// Execute the check operation
    pub fn execute(&self, options: CheckOptions) -> BrandingResult<CheckResult> {
        self.execute_with_callback(options, |_| {})
    }

    /// Execute with a callback for each event (for streaming UI)
    pub fn execute_with_callback<F>(
        &self,
        options: CheckOptions,
        mut on_event: F,
    ) -> BrandingResult<CheckResult>
    where
        F: FnMut(CheckEvent<'_>),
    {
        let mut result = CheckResult::default();

        for env in options.envs.expand() {
            on_event(CheckEvent::Started(env));
            let report = check_environment(&self.repo_root, env, options.check_logo_files)?;
            on_event(CheckEvent::Finished(&report));
            result.reports.push(report);
        }

        Ok(result)
    }
}
