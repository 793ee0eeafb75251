use std::path::Path;

use branding_check::config::{ConfigWarning, LoadedConfig};
use branding_check::{CheckOptions, CheckResult};

use crate::ui::ci::{github_actions_annotation, AnnotationLevel};
use crate::ui::context::UiContext;
use crate::ui::theme::{self, colors, icons};

pub fn print_config_warnings(warnings: &[ConfigWarning], ui: &UiContext) {
    for w in warnings {
        let location = match w.line {
            Some(line) => format!("{}:{}", w.file.display(), line),
            None => w.file.display().to_string(),
        };
        let icon = theme::paint(icons::WARNING, colors::WARNING, ui.color_stderr);
        eprintln!("{} Unknown config key '{}' in {}", icon, w.key, location);

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }

        if ui.caps.is_github_actions {
            eprintln!(
                "{}",
                github_actions_annotation(
                    AnnotationLevel::Warning,
                    &format!("Unknown config key '{}'", w.key),
                    Some(&w.file.display().to_string()),
                    Some("branding-check config"),
                )
            );
        }
    }
}

/// Diagnostics shown with `-v` / `-vv` before any environment is checked
pub fn print_run_context(
    repo_root: &Path,
    loaded: &LoadedConfig,
    options: &CheckOptions,
    ui: &UiContext,
) {
    if ui.verbose == 0 {
        return;
    }

    let dim = |s: &str| theme::paint(s, colors::DIM, ui.color_stderr);
    eprintln!("{}", dim(&format!("Repo root: {}", repo_root.display())));
    match &loaded.source {
        Some(path) => eprintln!("{}", dim(&format!("Config: {}", path.display()))),
        None => eprintln!("{}", dim("Config: built-in defaults")),
    }

    if ui.verbose >= 2 {
        let on_off = |b: bool| if b { "on" } else { "off" };
        eprintln!(
            "{}",
            dim(&format!("Logo files: {}", on_off(options.check_logo_files)))
        );
        eprintln!(
            "{}",
            dim(&format!(
                "Color: stdout {}, stderr {}",
                on_off(ui.color_stdout),
                on_off(ui.color_stderr)
            ))
        );
    }
}

pub fn print_checking(env: branding_check::Environment, repo_root: &Path, ui: &UiContext) {
    if ui.verbose > 0 {
        eprintln!(
            "{}",
            theme::paint(
                &format!("Checking {} in {}", env, repo_root.display()),
                colors::DIM,
                ui.color_stderr
            )
        );
    }
}

/// `Checked N environment(s): X passed, Y failed` with `-v`
pub fn print_summary(result: &CheckResult, ui: &UiContext) {
    if ui.verbose == 0 {
        return;
    }
    eprintln!(
        "{}",
        theme::paint(
            &format!(
                "Checked {} environment(s): {} passed, {} failed",
                result.reports.len(),
                result.passed(),
                result.failed()
            ),
            colors::DIM,
            ui.color_stderr
        )
    );
}
