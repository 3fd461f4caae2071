//! nhood-profiles CLI - build neighborhood profile reports from GIS layers

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod status;

use cli::{Cli, GlobalArgs};
use commands::{build, collect, export, shorten};

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.global);

    match run(&cli) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            std::process::ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        cli::Commands::Build(args) => build::execute(args, &cli.global),
        cli::Commands::Collect(args) => collect::execute(args, &cli.global),
        cli::Commands::Export(args) => export::execute(args, &cli.global),
        cli::Commands::Shorten(args) => shorten::execute(args, &cli.global),
    }
}

/// `-v` forces debug output; otherwise `RUST_LOG` or `info`
fn init_logging(global: &GlobalArgs) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if global.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}
