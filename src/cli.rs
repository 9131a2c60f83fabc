//! Command table

use clap::{Parser, Subcommand};

use crate::config::ConfigOverrides;

#[derive(Debug, Parser)]
#[command(name = "cli-core")]
#[command(version, about = "Validates the runtime environment and checks for CLI updates")]
pub struct Cli {
    /// Enable verbose logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Registry endpoint to query for updates
    #[arg(long, global = true, value_name = "URL")]
    pub registry: Option<String>,

    /// Query the upstream npm registry instead of the default mirror
    #[arg(long, global = true, conflicts_with = "registry")]
    pub original: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check the registry for a newer compatible version
    CheckUpdate {
        /// Package to look up (defaults to this CLI)
        #[arg(long)]
        package: Option<String>,

        /// Version to compare against (defaults to the running version)
        #[arg(long)]
        current: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the resolved configuration
    Env {
        /// Print the configuration as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            debug: self.debug,
            registry: self.registry.clone(),
            original: self.original,
        }
    }
}
