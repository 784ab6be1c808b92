//! splitkit - split HTML into HTML, CSS and JS, or combine them back

mod cli;
mod commands;
mod logging;
mod sink;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use splitkit_engine::{Config, Session};

use cli::{Cli, Command};
use sink::TerminalSink;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("invalid configuration {}", path.display()))?,
        None => Config::default(),
    };
    logging::init(cli.verbose, &config.log_level);
    tracing::debug!(version = splitkit_engine::VERSION, ?config, "starting");

    let mut session = Session::new(&config);
    let mut sink = TerminalSink::new();

    match &cli.command {
        Command::Split { input, out_dir } => {
            commands::split(&mut session, &mut sink, input.as_deref(), out_dir.as_deref())?;
        }
        Command::Combine {
            html,
            css,
            js,
            output,
        } => {
            commands::combine(
                &mut session,
                &mut sink,
                html,
                css.as_deref(),
                js.as_deref(),
                output.as_deref(),
            )?;
        }
    }

    Ok(if sink.had_error() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
