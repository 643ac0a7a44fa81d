//! Subcommand dispatch.

pub mod catalog;
pub mod demo;
pub mod quote;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;

use gymfee_membership::PricingEngine;

use crate::cli::{Cli, Commands};
use crate::config;
use crate::flow::{CANCELLED, InteractiveFlow};

pub fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let engine = config::load_engine(cli.catalog.as_deref())?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => interactive(&engine, &mut out),
        Commands::Quote(args) => {
            quote::run(&engine, &args, &mut out)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Demo => {
            demo::run(&engine, &mut out)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Catalog => {
            catalog::run(&engine, &mut out)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn interactive(engine: &PricingEngine, out: &mut impl Write) -> anyhow::Result<ExitCode> {
    let stdin = io::stdin();
    let code = InteractiveFlow::new(engine, stdin.lock(), &mut *out)
        .run()
        .context("interactive session failed")?;

    writeln!(out, "Program exited with code: {code}")?;

    Ok(if code == CANCELLED {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
