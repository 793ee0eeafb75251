//! branding-check CLI
//!
//! Usage: branding-check [--repo-root PATH] [--env production|staging|both]
//!                       [--check-logo-files]
//!
//! Exits 0 when every selected environment passes, 1 otherwise.

mod cli;
mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    commands::check::cmd_check(
        &cli.repo_root,
        cli.env,
        cli.check_logo_files,
        cli.color,
        cli.verbose,
    )
}
