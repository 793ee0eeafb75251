//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BrandingError, BrandingResult};
use crate::fs::is_regular_file;

use super::types::{ColorMode, Config};

/// Project config file name, looked up at the repo root
pub const CONFIG_FILE_NAME: &str = "branding-check.toml";

/// Enables/disables the logo cross-reference check
pub const ENV_LOGO_FILES: &str = "BRANDING_CHECK_LOGO_FILES";
/// Overrides `output.color`
pub const ENV_COLOR: &str = "BRANDING_CHECK_COLOR";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Configuration together with where it came from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    /// Config file that was read, if any
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> BrandingResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| BrandingError::io(path, e))?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| BrandingError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load `branding-check.toml` from the repo root (if present) and apply
/// `BRANDING_CHECK_*` environment overrides.
pub fn load_for_repo(repo_root: &Path) -> BrandingResult<LoadedConfig> {
    load_for_repo_with_env(repo_root, |key| std::env::var(key).ok())
}

pub(crate) fn load_for_repo_with_env(
    repo_root: &Path,
    get_env: impl Fn(&str) -> Option<String>,
) -> BrandingResult<LoadedConfig> {
    let path = repo_root.join(CONFIG_FILE_NAME);

    let mut loaded = if is_regular_file(&path)? {
        let (config, warnings) = load_with_warnings(&path)?;
        LoadedConfig {
            config,
            source: Some(path),
            warnings,
        }
    } else {
        LoadedConfig::default()
    };

    loaded.config = with_env_overrides(loaded.config, get_env)?;
    Ok(loaded)
}

/// Apply environment variable overrides (BRANDING_CHECK_* prefix)
pub fn with_env_overrides(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> BrandingResult<Config> {
    if let Some(val) = get_env(ENV_LOGO_FILES) {
        config.checks.check_logo_files = match val.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" | "" => false,
            _ => {
                return Err(BrandingError::InvalidEnvVar {
                    var: ENV_LOGO_FILES,
                    value: val,
                    expected: "1, true, yes, on, 0, false, no, off",
                })
            }
        };
    }

    if let Some(val) = get_env(ENV_COLOR) {
        config.output.color = match val.trim().to_lowercase().as_str() {
            "auto" => ColorMode::Auto,
            "always" => ColorMode::Always,
            "never" => ColorMode::Never,
            _ => {
                return Err(BrandingError::InvalidEnvVar {
                    var: ENV_COLOR,
                    value: val,
                    expected: "auto, always, never",
                })
            }
        };
    }

    Ok(config)
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["checks", "check_logo_files", "output", "color"];

    let mut best: Option<(&str, usize)> = None;
    for &candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
