//! Test environment builder for isolated branding-check runs.
//!
//! Provides `TestEnv` - a temp directory acting as the repo root, plus
//! helpers to lay out branding assets and run the CLI against it.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use branding_check::domain::requirements;
use branding_check::Environment;
use serde_json::Value;
use tempfile::TempDir;

use super::fixtures::valid_branding;

/// Variables that change CLI behavior and must not leak in from the host
const ISOLATED_VARS: &[&str] = &[
    "BRANDING_CHECK_LOGO_FILES",
    "BRANDING_CHECK_COLOR",
    "NO_COLOR",
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "JENKINS_HOME",
    "BUILDKITE",
    "CIRCLECI",
    "BITRISE_IO",
    "TRAVIS",
    "TEAMCITY_VERSION",
];

/// Result of running the CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Isolated repo root with helpers to run the CLI
pub struct TestEnv {
    pub repo_root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    /// Empty repo root
    pub fn new() -> Self {
        Self {
            repo_root: TempDir::new().expect("Failed to create temp repo root"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_branding-check")),
        }
    }

    /// Repo root with every required file and a valid JSON for each env
    pub fn with_valid(envs: &[Environment]) -> Self {
        let env = Self::new();
        for e in envs {
            env.write_valid_environment(*e);
        }
        env
    }

    /// Get path relative to repo root
    pub fn path(&self, relative: &str) -> PathBuf {
        self.repo_root.path().join(relative)
    }

    /// Write a file under the repo root, creating parents
    pub fn write_file(&self, relative: &str, content: &str) {
        let full_path = self.path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    pub fn remove_file(&self, relative: &str) {
        std::fs::remove_file(self.path(relative)).expect("Failed to remove file");
    }

    /// Write `{env}.json`
    pub fn write_branding(&self, env: Environment, doc: &Value) {
        let content = serde_json::to_string_pretty(doc).expect("serialize branding");
        self.write_file(&env.json_file_name(), &content);
    }

    /// Lay out every required asset plus a valid `{env}.json`
    pub fn write_valid_environment(&self, env: Environment) {
        for rel in requirements::required_files(env) {
            self.write_file(&rel, "placeholder");
        }
        self.write_branding(env, &valid_branding());
    }

    /// Run the CLI with the repo root as working directory
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from_with_env(self.repo_root.path(), args, &[])
    }

    /// Run with extra environment variables
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.repo_root.path(), args, env_vars)
    }

    /// Run the CLI from a specific directory with extra env vars.
    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd).args(args);

        for key in ISOLATED_VARS {
            cmd.env_remove(key);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute branding-check");
        output_to_result(output)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
