use branding_check::{Environment, EnvironmentReport};

use crate::ui::theme::{self, colors, icons};

/// `{icons::OK} {env}: OK`
pub fn render_ok_line(env: Environment, color: bool) -> String {
    format!(
        "{} {}: {}",
        icons::OK,
        env,
        theme::paint("OK", colors::SUCCESS, color)
    )
}

/// Lines of one failed environment's block, starting with a blank line
pub fn render_failure_block(report: &EnvironmentReport, color: bool) -> Vec<String> {
    let mut lines = Vec::new();
    let header = format!(
        "=== {} CHECK FAILED ===",
        report.environment.as_str().to_uppercase()
    );
    lines.push(format!("\n{}", theme::paint(&header, colors::ERROR, color)));

    if !report.missing_files.is_empty() {
        lines.push(theme::paint("Missing required files:", colors::WARNING, color));
        lines.extend(report.missing_files.iter().map(|p| format!("  - {}", p)));
    }

    if !report.issues.is_empty() {
        lines.push(theme::paint("JSON issues:", colors::WARNING, color));
        lines.extend(report.issues.iter().map(|i| format!("  - {}", i)));
    }

    lines
}

/// All failure blocks joined into the text written to stderr
pub fn render_failures<'a>(
    reports: impl IntoIterator<Item = &'a EnvironmentReport>,
    color: bool,
) -> String {
    reports
        .into_iter()
        .flat_map(|report| render_failure_block(report, color))
        .collect::<Vec<_>>()
        .join("\n")
}
