//! Startup pipeline
//!
//! Each validation step implements [`StartupCheck`]. [`Startup`] runs them in
//! order and stops at the first failure.
//!
//! # Modules
//!
//! - [`package`]: logs the running version
//! - [`engine`]: Node.js engine version check
//! - [`privilege`]: root privilege downgrade
//! - [`home`]: user home directory check
//! - [`env_file`]: `~/.env` loading
//! - [`error`]: `StartupError`

pub mod engine;
pub mod env_file;
pub mod error;
pub mod home;
pub mod package;
pub mod privilege;

#[cfg(test)]
use mockall::automock;

use std::path::PathBuf;

use tracing::debug;

use crate::config::{CliConfig, ConfigOverrides, EnvVars};

pub use engine::EngineVersion;
pub use env_file::EnvFile;
pub use error::StartupError;
pub use home::UserHome;
pub use package::PackageVersion;
pub use privilege::RootPrivilege;

/// State threaded through the startup checks
#[derive(Debug, Clone, Default)]
pub struct StartupContext {
    pub env: EnvVars,
    pub home: Option<PathBuf>,
    pub overrides: ConfigOverrides,
}

impl StartupContext {
    pub fn new(env: EnvVars, home: Option<PathBuf>, overrides: ConfigOverrides) -> Self {
        Self {
            env,
            home,
            overrides,
        }
    }

    /// Context for the running process
    pub fn from_process(overrides: ConfigOverrides) -> Self {
        Self::new(EnvVars::from_process(), dirs::home_dir(), overrides)
    }

    /// Configuration from everything gathered so far
    pub fn config(&self) -> Result<CliConfig, StartupError> {
        let home = self.home.as_deref().ok_or(StartupError::HomeNotFound)?;
        Ok(CliConfig::resolve(home, &self.env, &self.overrides))
    }
}

/// One validation step of the startup pipeline
#[cfg_attr(test, automock)]
pub trait StartupCheck: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    fn run(&self, ctx: &mut StartupContext) -> Result<(), StartupError>;
}

/// Ordered list of startup checks
pub struct Startup {
    checks: Vec<Box<dyn StartupCheck>>,
}

impl Startup {
    pub fn new(checks: Vec<Box<dyn StartupCheck>>) -> Self {
        Self { checks }
    }

    /// Version, engine, privilege, home, then env-file
    pub fn with_default_checks() -> Self {
        Self::new(vec![
            Box::new(PackageVersion),
            Box::new(EngineVersion::detect()),
            Box::new(RootPrivilege),
            Box::new(UserHome),
            Box::new(EnvFile),
        ])
    }

    /// Run every check in order and resolve the configuration
    pub fn run(&self, ctx: &mut StartupContext) -> Result<CliConfig, StartupError> {
        for check in &self.checks {
            debug!("Running startup check: {}", check.name());
            check.run(ctx)?;
        }
        ctx.config()
    }
}
