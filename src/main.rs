// ABOUTME: Entry point for the lambda-deploy CLI application.
// ABOUTME: Parses arguments and dispatches to appropriate command handlers.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use lambda_deploy::error::Result;
use lambda_deploy::output::{Output, OutputMode};
use lambda_deploy::toolchain::check_toolchain;
use std::env;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins; otherwise the verbose flag picks the level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let mode = if cli.json {
        OutputMode::Json
    } else if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Normal
    };
    let mut output = Output::new(mode);
    output.banner();

    if let Err(e) = run(cli, &mut output).await {
        output.error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(cli: Cli, output: &mut Output) -> Result<()> {
    let cwd = env::current_dir()?;

    match cli.command {
        Commands::Init { force } => commands::init(&cwd, force, output),
        Commands::Create(args) => {
            if !cli.skip_toolchain_check {
                check_toolchain().await?;
            }
            commands::create(&cwd, args, output).await
        }
        Commands::Deploy(args) => {
            if !cli.skip_toolchain_check {
                check_toolchain().await?;
            }
            commands::deploy(&cwd, args, output).await
        }
    }
}
