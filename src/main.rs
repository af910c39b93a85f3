use clap::Parser;
use client_assertion::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Command::Mint(args) => cli::mint::run(args).await,
        Command::Jwks(args) => cli::jwks::run(args).await,
    }
}
