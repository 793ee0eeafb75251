use crate::cli::ColorWhen;
use crate::ui::terminal::{detect_capabilities, Stream, TerminalCapabilities};
use crate::ui::theme;
use branding_check::config::{ColorMode, Config};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub verbose: u8,
    pub caps: TerminalCapabilities,
    /// Colorize text written to stdout
    pub color_stdout: bool,
    /// Colorize text written to stderr
    pub color_stderr: bool,
}

impl UiContext {
    pub fn new(verbose: u8, cli_color: Option<ColorWhen>, config: &Config) -> Self {
        theme::take_color_control();
        Self::from_caps(verbose, cli_color, config, detect_capabilities())
    }

    pub(crate) fn from_caps(
        verbose: u8,
        cli_color: Option<ColorWhen>,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let resolve = |stream: Stream| match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => match config.output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color(stream) && !caps.is_ci,
            },
        };

        Self {
            verbose,
            caps,
            color_stdout: resolve(Stream::Stdout),
            color_stderr: resolve(Stream::Stderr),
        }
    }
}
