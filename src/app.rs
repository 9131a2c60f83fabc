//! Startup sequence and command dispatch

use anyhow::Context;

use crate::cli::{Cli, Command};
use crate::config::CliConfig;
use crate::startup::{Startup, StartupContext};
use crate::update::notify_update;
use crate::version::{UpdateStatus, VersionResolver};

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut ctx = StartupContext::from_process(cli.overrides());
    let config = Startup::with_default_checks().run(&mut ctx)?;

    match cli.command {
        None => {
            notify_update(&config).await;
            Ok(())
        }
        Some(Command::CheckUpdate {
            package,
            current,
            json,
        }) => {
            let package = package.unwrap_or_else(|| config.package_name.clone());
            let current = current.unwrap_or_else(|| config.package_version.clone());
            check_update(&config, &package, &current, json).await
        }
        Some(Command::Env { json }) => {
            notify_update(&config).await;
            print_env(&config, json)
        }
    }
}

async fn check_update(
    config: &CliConfig,
    package: &str,
    current: &str,
    json: bool,
) -> anyhow::Result<()> {
    let resolver = VersionResolver::for_endpoint(Some(&config.registry))?;
    let status = resolver
        .check_for_update(current, package)
        .await
        .with_context(|| format!("Failed to check {} for updates of {}", config.registry, package))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        println!("{}", describe_status(package, current, &status));
    }
    Ok(())
}

fn describe_status(package: &str, current: &str, status: &UpdateStatus) -> String {
    match (&status.latest, status.update_available) {
        (Some(latest), true) => format!("{}: {} -> {}", package, current, latest),
        (Some(latest), false) => format!(
            "{}: {} is up to date (compatible: {})",
            package, current, latest
        ),
        (None, _) => format!("{}: no compatible version published", package),
    }
}

fn print_env(config: &CliConfig, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(config)?);
    } else {
        println!("home:            {}", config.home.display());
        println!("cli home:        {}", config.cli_home.display());
        println!("log level:       {}", config.log_level);
        println!("package:         {}@{}", config.package_name, config.package_version);
        println!("registry:        {}", config.registry);
    }
    Ok(())
}
