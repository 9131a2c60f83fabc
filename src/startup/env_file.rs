use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use crate::config::ENV_FILE_NAME;
use crate::startup::{StartupCheck, StartupContext, StartupError};

/// Read `KEY=value` pairs from an env-file without exporting them
pub fn read_env_file(path: &Path) -> Result<HashMap<String, String>, StartupError> {
    let to_error = |source| StartupError::EnvFile {
        path: path.to_path_buf(),
        source,
    };

    dotenvy::from_path_iter(path)
        .map_err(to_error)?
        .collect::<Result<HashMap<_, _>, _>>()
        .map_err(to_error)
}

/// Loads `~/.env` into the startup environment and resolves the CLI home
pub struct EnvFile;

impl StartupCheck for EnvFile {
    fn name(&self) -> &'static str {
        "env-file"
    }

    fn run(&self, ctx: &mut StartupContext) -> Result<(), StartupError> {
        let home = ctx.home.clone().ok_or(StartupError::HomeNotFound)?;
        let path = home.join(ENV_FILE_NAME);

        if path.is_file() {
            let vars = read_env_file(&path)?;
            debug!("Loaded {} variables from {}", vars.len(), path.display());
            ctx.env.set_file_vars(vars);
        }

        let config = ctx.config()?;
        debug!("CLI home: {}", config.cli_home.display());
        Ok(())
    }
}
