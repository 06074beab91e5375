use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use lexicon::cli::{Cli, execute};
use tracing::Level;

fn main() -> ExitCode {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    match execute(&cli) {
        Ok(outcome) => {
            let mut stdout = std::io::stdout().lock();
            if let Err(err) = stdout.write_all(outcome.output.as_bytes()) {
                tracing::error!(error = %err, "failed to write output");
                return ExitCode::FAILURE;
            }
            if outcome.success {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(err) => {
            let message = format!("{err:#}");
            tracing::error!(error = %message, "lexicon failed");
            ExitCode::FAILURE
        }
    }
}
