//! Filesystem checks: required asset files and logo cross-references

use std::path::Path;

use crate::domain::requirements::{self, LOGO_FIELDS};
use crate::domain::{escape_controls, quote, resolve, strip, Environment};
use crate::error::BrandingResult;
use crate::fs::is_regular_file;

/// Required files missing for `env`, repo-relative, in table order
pub fn check_required_files(repo_root: &Path, env: Environment) -> BrandingResult<Vec<String>> {
    let mut missing = Vec::new();
    for rel in requirements::required_files(env) {
        if !is_regular_file(&repo_root.join(&rel))? {
            missing.push(rel);
        }
    }
    Ok(missing)
}

/// Logo fields whose file name does not exist under `asset/{env}/images/`.
///
/// Non-string and blank values are skipped; presence is reported elsewhere.
/// A name the OS cannot look up (too long, symlink loop) counts as missing.
pub fn check_logo_files(
    repo_root: &Path,
    env: Environment,
    data: &serde_json::Value,
) -> Vec<String> {
    let mut issues = Vec::new();
    for field in LOGO_FIELDS {
        let Some(value) = resolve(data, field).and_then(|v| v.as_str()) else {
            continue;
        };
        let file_name = strip(value);
        if file_name.is_empty() {
            continue;
        }

        let assumed = requirements::logo_path(env, file_name);
        if !is_regular_file(&repo_root.join(&assumed)).unwrap_or(false) {
            issues.push(format!(
                "{} points to {}, but missing file at: {}",
                field,
                quote(value),
                escape_controls(&assumed)
            ));
        }
    }
    issues
}
