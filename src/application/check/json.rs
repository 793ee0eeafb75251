//! Branding JSON checks: required keys, colors, optional logo files

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::domain::requirements::{COLOR_FIELDS, REQUIRED_JSON_PATHS};
use crate::domain::{is_hex_color, is_non_empty, quote, resolve, Environment};
use crate::error::BrandingResult;
use crate::fs::is_regular_file;

use super::files::check_logo_files;

/// Collect every JSON issue for `env`.
///
/// A missing or unparsable `{env}.json` yields a single issue and stops
/// there. Otherwise all keys, colors and (optionally) logos are checked
/// independently.
pub fn check_json(
    repo_root: &Path,
    env: Environment,
    check_logos: bool,
) -> BrandingResult<Vec<String>> {
    let json_rel = env.json_file_name();
    let json_path = repo_root.join(&json_rel);

    if !is_regular_file(&json_path)? {
        return Ok(vec![format!("Missing JSON: {}", json_rel)]);
    }

    let data = match load_json(&json_path) {
        Ok(data) => data,
        Err(message) => return Ok(vec![format!("Invalid JSON ({}): {}", json_rel, message)]),
    };

    let mut issues = check_required_keys(&data);
    issues.extend(check_colors(&data));

    if check_logos {
        issues.extend(check_logo_files(repo_root, env, &data));
    }

    Ok(issues)
}

fn load_json(path: &Path) -> Result<Value, String> {
    let content = fs::read_to_string(path).map_err(|e| e.to_string())?;
    serde_json::from_str(&content).map_err(|e| e.to_string())
}

/// One `Missing key` or `Empty value` issue per offending required path
pub fn check_required_keys(data: &Value) -> Vec<String> {
    REQUIRED_JSON_PATHS
        .iter()
        .filter_map(|path| match resolve(data, path) {
            None => Some(format!("Missing key: {}", path)),
            value if !is_non_empty(value) => Some(format!("Empty value: {}", path)),
            _ => None,
        })
        .collect()
}

/// One `Invalid color` issue per string color field that is not `#RRGGBB`
pub fn check_colors(data: &Value) -> Vec<String> {
    COLOR_FIELDS
        .iter()
        .filter_map(|field| {
            let value = resolve(data, field)?.as_str()?;
            (!is_hex_color(value)).then(|| {
                format!(
                    "Invalid color {} (expected #RRGGBB): {}",
                    field,
                    quote(value)
                )
            })
        })
        .collect()
}
