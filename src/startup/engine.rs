//! Node.js engine version check

use std::process::Command;

use tracing::debug;

use crate::config::LOWEST_NODE_VERSION;
use crate::startup::{StartupCheck, StartupContext, StartupError};
use crate::version::semver::greater_or_equal;

/// Reports the installed engine version, e.g. "v18.17.0"
pub type EngineDetector = fn() -> Option<String>;

/// Requires the installed Node.js to be at least a given version
pub struct EngineVersion {
    lowest: String,
    detector: EngineDetector,
}

impl EngineVersion {
    pub fn new(lowest: &str, detector: EngineDetector) -> Self {
        Self {
            lowest: lowest.to_string(),
            detector,
        }
    }

    /// Check against [`LOWEST_NODE_VERSION`] using `node --version`
    pub fn detect() -> Self {
        Self::new(LOWEST_NODE_VERSION, detect_node_version)
    }
}

/// Run `node --version` and return its trimmed output
pub fn detect_node_version() -> Option<String> {
    let output = Command::new("node").arg("--version").output().ok()?;
    if !output.status.success() {
        return None;
    }
    let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!version.is_empty()).then_some(version)
}

impl StartupCheck for EngineVersion {
    fn name(&self) -> &'static str {
        "engine-version"
    }

    fn run(&self, _ctx: &mut StartupContext) -> Result<(), StartupError> {
        let Some(current) = (self.detector)() else {
            return Err(StartupError::EngineNotFound {
                required: self.lowest.clone(),
            });
        };

        debug!("Node.js {} detected, lowest supported v{}", current, self.lowest);

        if !greater_or_equal(&current, &self.lowest) {
            return Err(StartupError::EngineTooOld {
                required: self.lowest.clone(),
                found: current,
            });
        }
        Ok(())
    }
}
