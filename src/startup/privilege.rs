//! Root privilege downgrade
//!
//! A CLI started with sudo must not leave root-owned files in the user's
//! home. When the effective user is root the process switches to the
//! invoking user, or to the platform's default first user.

use crate::config::EnvVars;
use crate::startup::{StartupCheck, StartupContext, StartupError};

#[cfg(target_os = "macos")]
const DEFAULT_UID: u32 = 501;
#[cfg(target_os = "macos")]
const DEFAULT_GID: u32 = 20;

#[cfg(not(target_os = "macos"))]
const DEFAULT_UID: u32 = 1000;
#[cfg(not(target_os = "macos"))]
const DEFAULT_GID: u32 = 1000;

/// User and group to switch to when running as root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DowngradeIds {
    pub uid: u32,
    pub gid: u32,
}

impl DowngradeIds {
    /// `SUDO_UID`/`SUDO_GID` when present and numeric, platform defaults otherwise
    pub fn from_env(env: &EnvVars) -> Self {
        let parse = |key: &str| env.get(key).and_then(|v| v.parse::<u32>().ok());

        Self {
            uid: parse("SUDO_UID").unwrap_or(DEFAULT_UID),
            gid: parse("SUDO_GID").unwrap_or(DEFAULT_GID),
        }
    }
}

pub struct RootPrivilege;

impl StartupCheck for RootPrivilege {
    fn name(&self) -> &'static str {
        "root-privilege"
    }

    #[cfg(unix)]
    fn run(&self, ctx: &mut StartupContext) -> Result<(), StartupError> {
        use nix::unistd::{Gid, Uid, geteuid, setgid, setuid};

        if !geteuid().is_root() {
            return Ok(());
        }

        let ids = DowngradeIds::from_env(&ctx.env);
        tracing::debug!("Running as root, switching to uid {} gid {}", ids.uid, ids.gid);

        // Group first: once the uid is dropped setgid is no longer permitted.
        setgid(Gid::from_raw(ids.gid))
            .and_then(|_| setuid(Uid::from_raw(ids.uid)))
            .map_err(|errno| StartupError::PrivilegeDowngrade(errno.into()))
    }

    #[cfg(not(unix))]
    fn run(&self, _ctx: &mut StartupContext) -> Result<(), StartupError> {
        Ok(())
    }
}
