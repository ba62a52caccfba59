use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tally",
    about = "Receipt Tally — receipt submission and loyalty points scoring",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the HTTP service
    Serve(ServeArgs),
    /// Score a receipt JSON file without the server
    Score(ScoreArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,
}

#[derive(Args)]
pub struct ScoreArgs {
    /// Path to a receipt JSON document
    pub file: PathBuf,
}
