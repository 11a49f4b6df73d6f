//! poetics - guess the metre, rhyme scheme and form of a poem

use clap::Parser;
use colored::Colorize;
use std::process;

use poetics::cli::commands::{self, Session};
use poetics::cli::Cli;

fn main() {
    let cli = Cli::parse();

    let result = Session::load(cli.config, cli.verbose).and_then(|session| {
        init_tracing(session.verbose());
        commands::execute(cli.command, &session)
    });

    if let Err(e) = result {
        eprintln!("{}: {:#}", "Error".red().bold(), e);
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "warn,poetics=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}
