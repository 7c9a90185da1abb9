//! `skinsgen` binary.

use clap::Parser;
use skinsgen::cli::{self, Cli, Outcome};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli::run(&cli) {
        Ok(outcome) => {
            match &outcome {
                Outcome::Printed(artifact) => {
                    if let Err(e) = cli::emit(&mut std::io::stdout().lock(), artifact) {
                        eprintln!("skinsgen: {}", e);
                        return ExitCode::from(cli::error_exit_code(&e));
                    }
                }
                Outcome::Stale => eprintln!("{} is out of date", cli.output.display()),
                Outcome::Written(summary) => tracing::info!(
                    "Generated {} record(s), {} field(s)",
                    summary.records,
                    summary.fields
                ),
                Outcome::Current => {}
            }
            ExitCode::from(outcome.exit_code())
        }
        Err(e) => {
            eprintln!("skinsgen: {}", e);
            ExitCode::from(cli::error_exit_code(&e))
        }
    }
}
