use is_terminal::IsTerminal;

/// Output stream a piece of text is destined for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub stdout_is_tty: bool,
    pub stderr_is_tty: bool,
    pub term_is_dumb: bool,
    pub no_color: bool,
    pub is_ci: bool,
    pub is_github_actions: bool,
}

impl TerminalCapabilities {
    /// Whether `stream` can render ANSI colors on its own merits
    pub fn supports_color(&self, stream: Stream) -> bool {
        let is_tty = match stream {
            Stream::Stdout => self.stdout_is_tty,
            Stream::Stderr => self.stderr_is_tty,
        };
        is_tty && !self.term_is_dumb && !self.no_color
    }
}

pub fn detect_capabilities() -> TerminalCapabilities {
    detect_capabilities_impl(
        |key| std::env::var(key).ok(),
        std::io::stdout().is_terminal(),
        std::io::stderr().is_terminal(),
    )
}

fn detect_capabilities_impl(
    get_env: impl Fn(&str) -> Option<String>,
    stdout_is_tty: bool,
    stderr_is_tty: bool,
) -> TerminalCapabilities {
    let term = get_env("TERM").unwrap_or_default();

    TerminalCapabilities {
        stdout_is_tty,
        stderr_is_tty,
        term_is_dumb: term.eq_ignore_ascii_case("dumb"),
        no_color: get_env("NO_COLOR").is_some(),
        is_ci: is_ci_env(&get_env),
        is_github_actions: get_env("GITHUB_ACTIONS").is_some(),
    }
}

fn is_ci_env(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    const KEYS: &[&str] = &[
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

    KEYS.iter().any(|k| get_env(k).is_some())
}
