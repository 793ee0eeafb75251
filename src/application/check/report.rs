//! Per-environment and whole-run check results

use crate::domain::Environment;

/// Outcome of checking one environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentReport {
    /// Environment that was checked
    pub environment: Environment,
    /// Required files that are absent, repo-relative, in table order
    pub missing_files: Vec<String>,
    /// Human-readable JSON issues, in discovery order
    pub issues: Vec<String>,
}

impl EnvironmentReport {
    pub fn new(environment: Environment) -> Self {
        Self {
            environment,
            missing_files: Vec::new(),
            issues: Vec::new(),
        }
    }

    /// An environment passes iff nothing is missing and nothing is wrong
    pub fn passed(&self) -> bool {
        self.missing_files.is_empty() && self.issues.is_empty()
    }
}

/// Result of checking every selected environment
#[derive(Debug, Clone, Default)]
pub struct CheckResult {
    pub reports: Vec<EnvironmentReport>,
}

impl CheckResult {
    /// True when every checked environment passed
    pub fn is_success(&self) -> bool {
        self.reports.iter().all(EnvironmentReport::passed)
    }

    /// Reports of environments that failed, in check order
    pub fn failures(&self) -> impl Iterator<Item = &EnvironmentReport> {
        self.reports.iter().filter(|r| !r.passed())
    }

    pub fn passed(&self) -> usize {
        self.reports.iter().filter(|r| r.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.reports.len() - self.passed()
    }
}
