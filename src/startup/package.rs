use tracing::info;

use crate::config::PACKAGE_VERSION;
use crate::startup::{StartupCheck, StartupContext, StartupError};

/// Announces the running CLI version
pub struct PackageVersion;

impl StartupCheck for PackageVersion {
    fn name(&self) -> &'static str {
        "package-version"
    }

    fn run(&self, _ctx: &mut StartupContext) -> Result<(), StartupError> {
        info!("cli {}", PACKAGE_VERSION);
        Ok(())
    }
}
