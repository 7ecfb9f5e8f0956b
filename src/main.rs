#![allow(clippy::enum_variant_names)]

use std::process::ExitCode;

use clap::{CommandFactory as _, Parser as _};
use tracing::{debug, error};

use crate::{
    application::{Application, RuntimeConfig},
    cli::Cli,
    report::{Status, StatusReporter, TerminalReporter},
};

mod application;
mod cli;
mod drivers;
mod ext;
mod filesystem;
mod report;
mod structure_file;

fn main() -> ExitCode {
    let cli_args = Cli::parse();
    setup_tracing(&cli_args);
    debug!("Parsed CLI arguments: {cli_args:?}");
    TerminalReporter::configure_colors();

    let Some(runtime_config) = RuntimeConfig::from_cli(cli_args) else {
        if let Err(e) = Cli::command().print_help() {
            error!("Failed to print help: {e}");
        }
        return ExitCode::SUCCESS;
    };

    let mut reporter = TerminalReporter::new();
    let result = Application::run(runtime_config, &mut reporter);
    let exit_code = match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            reporter.report(Status::Failed {
                message: snafu::Report::from_error(err).to_string(),
            });
            ExitCode::FAILURE
        }
    };
    reporter.finish();

    exit_code
}

fn setup_tracing(cli_args: &Cli) {
    if let Some(level) = cli_args.log_level.to_tracing_level() {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .without_time()
            .compact()
            .init();
    }
}
