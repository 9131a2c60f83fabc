use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use cli_core::cli::Cli;
use cli_core::config::LogLevel;

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli_core::logging::init(LogLevel::from_debug(cli.debug));

    let result = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(anyhow::Error::from)
        .and_then(|runtime| runtime.block_on(cli_core::app::run(cli)));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
