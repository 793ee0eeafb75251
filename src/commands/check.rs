use std::path::Path;

use anyhow::{Context, Result};

use branding_check::{CheckEvent, CheckOptions, CheckUseCase, EnvSelector};

use crate::cli::ColorWhen;
use crate::ui::context::UiContext;
use crate::ui::{ci, output, views};

pub fn cmd_check(
    repo_root: &Path,
    envs: EnvSelector,
    check_logo_files: bool,
    color: Option<ColorWhen>,
    verbose: u8,
) -> Result<()> {
    let repo_root = std::path::absolute(repo_root)
        .with_context(|| format!("cannot resolve repo root {}", repo_root.display()))?;

    let loaded = branding_check::config::load_for_repo(&repo_root)?;
    let ui = UiContext::new(verbose, color, &loaded.config);
    output::print_config_warnings(&loaded.warnings, &ui);

    // The flag can only switch the logo check on.
    let options = CheckOptions {
        envs,
        check_logo_files: check_logo_files || loaded.config.checks.check_logo_files,
    };
    output::print_run_context(&repo_root, &loaded, &options, &ui);

    let use_case = CheckUseCase::new(&repo_root);
    let result = use_case.execute_with_callback(options, |event| match event {
        CheckEvent::Started(env) => output::print_checking(env, use_case.repo_root(), &ui),
        CheckEvent::Finished(report) => {
            if report.passed() {
                println!(
                    "{}",
                    views::report::render_ok_line(report.environment, ui.color_stdout)
                );
            }
        }
    })?;

    output::print_summary(&result, &ui);

    if result.is_success() {
        return Ok(());
    }

    if ui.caps.is_github_actions {
        for report in result.failures() {
            for line in ci::report_annotations(report) {
                eprintln!("{}", line);
            }
        }
    }

    eprintln!(
        "{}",
        views::report::render_failures(result.failures(), ui.color_stderr)
    );
    std::process::exit(1);
}
