use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("cli-core requires Node.js v{required} or later, but no Node.js was found")]
    EngineNotFound { required: String },

    #[error("cli-core requires Node.js v{required} or later, found {found}")]
    EngineTooOld { required: String, found: String },

    #[error("Failed to downgrade root privileges: {0}")]
    PrivilegeDowngrade(#[source] std::io::Error),

    #[error("Current user home directory does not exist")]
    HomeNotFound,

    #[error("Failed to load env file {}: {source}", .path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}
