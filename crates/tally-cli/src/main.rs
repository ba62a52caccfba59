use clap::Parser;

mod cli;
mod commands;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    commands::run_command(cli::Cli::parse())
}
