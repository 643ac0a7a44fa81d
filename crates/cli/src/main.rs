use std::process::ExitCode;

use clap::Parser;

use gymfee_cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    gymfee_observability::init(&cli.log_level, cli.log_format());

    match gymfee_cli::commands::run(cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
