use anyhow::Context;
use colored::Colorize;

use tally_server::{AppState, ServerConfig, TallyServer};
use tally_types::{validate, Receipt};

use crate::cli::{Cli, Command, ScoreArgs, ServeArgs};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args),
        Command::Score(args) => cmd_score(args),
    }
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = ServerConfig {
        bind_addr: args.bind,
        ..ServerConfig::default()
    };
    println!(
        "{} Receipt Tally listening on {}",
        "✓".green().bold(),
        config.bind_addr.to_string().bold()
    );

    let server = TallyServer::new(config, AppState::in_memory());
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server.serve())?;
    Ok(())
}

fn cmd_score(args: ScoreArgs) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(&args.file)
        .with_context(|| format!("reading {}", args.file.display()))?;
    let receipt: Receipt = serde_json::from_str(&raw)
        .with_context(|| format!("decoding {}", args.file.display()))?;
    validate(&receipt).context("invalid receipt")?;

    let points = tally_engine::score(&receipt)?;
    println!(
        "{}  {} → {} points",
        "✓".green().bold(),
        receipt.retailer.bold(),
        points.to_string().yellow().bold()
    );
    Ok(())
}
