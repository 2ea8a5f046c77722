//! Configuration for the process-backed reasoner.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Environment variable overriding [`ReasonerConfig::program`].
pub const ENV_PROGRAM: &str = "CSP_REASONER_BIN";
/// Environment variable overriding [`ReasonerConfig::folder`].
pub const ENV_FOLDER: &str = "CSP_REASONER_FOLDER";
/// Environment variable overriding [`ReasonerConfig::timeout_ms`].
pub const ENV_TIMEOUT_MS: &str = "CSP_REASONER_TIMEOUT_MS";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReasonerConfig {
    /// Solver executable.
    pub program: PathBuf,
    /// Arguments placed before the document file name.
    pub args: Vec<String>,
    /// Parent of the per-request scratch directories.
    pub folder: PathBuf,
    /// Upper bound on a single run; `None` waits forever.
    pub timeout_ms: Option<u64>,
}

impl Default for ReasonerConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from("dummy"),
            args: Vec::new(),
            folder: PathBuf::from("csp_files"),
            timeout_ms: None,
        }
    }
}

impl ReasonerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a YAML configuration; absent keys keep their defaults.
    pub fn from_yaml_str(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }

    /// Defaults overridden by `CSP_REASONER_*` environment variables.
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from a key lookup (the environment, in production).
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(program) = lookup(ENV_PROGRAM) {
            self.program = PathBuf::from(program);
        }
        if let Some(folder) = lookup(ENV_FOLDER) {
            self.folder = PathBuf::from(folder);
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_MS) {
            match raw.trim().parse::<u64>() {
                Ok(ms) => self.timeout_ms = Some(ms),
                Err(_) => tracing::warn!("ignoring invalid {ENV_TIMEOUT_MS}={raw:?}"),
            }
        }
        self
    }

    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_folder(mut self, folder: impl Into<PathBuf>) -> Self {
        self.folder = folder.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = Some(timeout.as_millis() as u64);
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}
