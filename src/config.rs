use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::version::registries::default_registry;

// =============================================================================
// Startup constants
// =============================================================================

/// Package name checked against the registry unless `CLI_PACKAGE_NAME` is set
pub const PACKAGE_NAME: &str = env!("CARGO_PKG_NAME");

/// Version of the running CLI
pub const PACKAGE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Lowest supported Node.js engine version
pub const LOWEST_NODE_VERSION: &str = "12.0.0";

/// CLI home directory name under the user home when `CLI_HOME` is unset
pub const DEFAULT_CLI_HOME: &str = ".cli-core";

/// Env-file loaded from the user home directory
pub const ENV_FILE_NAME: &str = ".env";

/// Timeout for the startup update check in milliseconds (10 seconds)
pub const UPDATE_CHECK_TIMEOUT_MS: u64 = 10_000;

/// Log verbosity selected on the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    #[default]
    Info,
    Verbose,
}

impl LogLevel {
    pub fn from_debug(debug: bool) -> Self {
        if debug { Self::Verbose } else { Self::Info }
    }

    /// Directive understood by `tracing_subscriber::EnvFilter`
    pub fn as_filter(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Verbose => "debug",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

/// Values given on the command line that take part in configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub debug: bool,
    pub registry: Option<String>,
    pub original: bool,
}

/// Environment variables visible to the CLI
///
/// A snapshot of the process environment layered over the variables read
/// from the env-file. The process always wins and empty values count as
/// unset. Nothing here is ever exported back into the process.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnvVars {
    process: HashMap<String, String>,
    file: HashMap<String, String>,
}

impl EnvVars {
    pub fn new(process: HashMap<String, String>) -> Self {
        Self {
            process,
            file: HashMap::new(),
        }
    }

    pub fn from_process() -> Self {
        Self::new(std::env::vars().collect())
    }

    pub fn set_file_vars(&mut self, file: HashMap<String, String>) {
        self.file = file;
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        [&self.process, &self.file]
            .into_iter()
            .filter_map(|vars| vars.get(key))
            .map(String::as_str)
            .find(|value| !value.is_empty())
    }

    fn flag(&self, key: &str) -> bool {
        self.get(key)
            .is_some_and(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
    }
}

/// Resolved CLI configuration, built once at startup
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CliConfig {
    pub home: PathBuf,
    pub cli_home: PathBuf,
    pub log_level: LogLevel,
    pub package_name: String,
    pub package_version: String,
    pub registry: String,
}

impl CliConfig {
    pub fn resolve(home: &Path, env: &EnvVars, overrides: &ConfigOverrides) -> Self {
        let registry = overrides
            .registry
            .clone()
            .or_else(|| env.get("CLI_REGISTRY").map(str::to_string))
            .unwrap_or_else(|| {
                default_registry(overrides.original || env.flag("CLI_REGISTRY_ORIGINAL"))
                    .to_string()
            });

        Self {
            home: home.to_path_buf(),
            cli_home: cli_home_with_env(home, env.get("CLI_HOME")),
            log_level: LogLevel::from_debug(overrides.debug),
            package_name: env
                .get("CLI_PACKAGE_NAME")
                .unwrap_or(PACKAGE_NAME)
                .to_string(),
            package_version: PACKAGE_VERSION.to_string(),
            registry,
        }
    }
}

fn cli_home_with_env(home: &Path, cli_home: Option<&str>) -> PathBuf {
    home.join(cli_home.unwrap_or(DEFAULT_CLI_HOME))
}
