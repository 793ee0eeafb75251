//! CLI Argument Parsing

use std::path::PathBuf;

use branding_check::EnvSelector;
use clap::Parser;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// branding-check - validate per-environment branding config and assets
#[derive(Parser, Debug)]
#[command(name = "branding-check")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Repo root path
    #[arg(long, default_value = ".")]
    pub repo_root: PathBuf,

    /// Environment(s) to validate
    #[arg(long, value_enum, default_value = "both")]
    pub env: EnvSelector,

    /// Also verify branding.logoUrl/logoDarkUrl exist under asset/<env>/images/
    #[arg(long)]
    pub check_logo_files: bool,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
