//! CLI module for the client assertion tool
//!
//! Provides subcommands:
//! - `mint`: assemble and print a signed client assertion (default)
//! - `jwks`: print the verification key as a JWK Set

pub mod jwks;
pub mod mint;

use clap::{Parser, Subcommand};

/// Client assertion minting tool for OAuth2 private_key_jwt flows
#[derive(Parser)]
#[command(name = "client-assertion")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Assemble and print a signed client assertion (default)
    Mint(mint::MintArgs),

    /// Print the verification key as a JWK Set
    Jwks(jwks::JwksArgs),
}

impl Default for Command {
    fn default() -> Self {
        Self::Mint(mint::MintArgs::default())
    }
}
