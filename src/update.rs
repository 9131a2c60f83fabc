//! Startup update notice

use std::time::Duration;

use console::style;
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::config::{CliConfig, UPDATE_CHECK_TIMEOUT_MS};
use crate::version::VersionResolver;
use crate::version::error::RegistryError;

/// Message shown when a newer compatible version is published
pub fn update_notice(package_name: &str, current: &str, latest: &str) -> String {
    format!(
        "Please update {name} manually, current version: {current}, latest version: {latest}\n    \
         Update command: npm install -g {name}",
        name = package_name,
    )
}

/// Yellow notice text, coloured only when stderr supports it
fn styled_notice(notice: &str) -> String {
    style(notice).for_stderr().yellow().to_string()
}

/// Check the registry for the configured package.
///
/// Returns the notice text when an update is available.
pub async fn check_global_update(
    resolver: &VersionResolver,
    config: &CliConfig,
) -> Result<Option<String>, RegistryError> {
    let status = resolver
        .check_for_update(&config.package_version, &config.package_name)
        .await?;

    match status.latest {
        Some(latest) if status.update_available => Ok(Some(update_notice(
            &config.package_name,
            &config.package_version,
            &latest,
        ))),
        _ => {
            debug!("{} {} is up to date", config.package_name, config.package_version);
            Ok(None)
        }
    }
}

/// Print the update notice, if any. Failures are logged and never fatal.
pub async fn notify_update(config: &CliConfig) {
    let resolver = match VersionResolver::for_endpoint(Some(&config.registry)) {
        Ok(resolver) => resolver,
        Err(e) => {
            warn!("Failed to create registry client: {}", e);
            return;
        }
    };

    let check = check_global_update(&resolver, config);
    match timeout(Duration::from_millis(UPDATE_CHECK_TIMEOUT_MS), check).await {
        Ok(Ok(Some(notice))) => warn!("{}", styled_notice(&notice)),
        Ok(Ok(None)) => {}
        Ok(Err(e)) => warn!("Failed to check for updates: {}", e),
        Err(_) => warn!(
            "Update check timed out after {}ms",
            UPDATE_CHECK_TIMEOUT_MS
        ),
    }
}
