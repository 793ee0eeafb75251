//! Environment value objects - which deployment target is being checked

/// Deployment environment with its own config file and asset tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Environment {
    Production,
    Staging,
}

impl Environment {
    /// Environments in check order
    pub const ALL: [Environment; 2] = [Environment::Production, Environment::Staging];

    /// Name used in file names and path templates
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Production => "production",
            Environment::Staging => "staging",
        }
    }

    /// Config file name relative to the repo root (`production.json`)
    pub fn json_file_name(&self) -> String {
        format!("{}.json", self.as_str())
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Environment selection accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum EnvSelector {
    Production,
    Staging,
    /// Meta-selector, expands to every environment
    #[default]
    Both,
}

impl EnvSelector {
    /// Expand the selector into concrete environments, in check order
    pub fn expand(&self) -> Vec<Environment> {
        match self {
            EnvSelector::Production => vec![Environment::Production],
            EnvSelector::Staging => vec![Environment::Staging],
            EnvSelector::Both => Environment::ALL.to_vec(),
        }
    }
}
