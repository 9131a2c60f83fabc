use crate::startup::{StartupCheck, StartupContext, StartupError};

/// Requires a user home directory that exists on disk
pub struct UserHome;

impl StartupCheck for UserHome {
    fn name(&self) -> &'static str {
        "user-home"
    }

    fn run(&self, ctx: &mut StartupContext) -> Result<(), StartupError> {
        match ctx.home.as_deref() {
            Some(home) if home.is_dir() => Ok(()),
            _ => Err(StartupError::HomeNotFound),
        }
    }
}
