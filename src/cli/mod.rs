//! CLI module for gimmeanuuid
//!
//! # Commands
//!
//! - `v1` .. `v5` - Fetch a UUID of the given version from the service
//! - `config` - Configuration utilities (init)
//! - `completions` - Generate shell completions
//!
//! # Example
//!
//! ```bash
//! # Random UUID from a local service
//! gimmeanuuid v4 --base-url http://localhost:8080
//!
//! # Name based UUID, JSON output
//! gimmeanuuid v5 dns example.com --json
//! ```

pub mod completions;
pub mod config;
pub mod generate;

pub use completions::handle_completions;
pub use config::handle_config_init;
pub use generate::{run_generate, UuidRequest};

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// gimmeanuuid - fetch UUIDs from a gimme-an-uuid service
#[derive(Parser, Debug)]
#[command(
    name = "gimmeanuuid",
    version,
    about = "Fetch version 1-5 UUIDs from a gimme-an-uuid service"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Time-based UUID (version 1)
    V1(PlainArgs),
    /// DCE security UUID (version 2)
    V2(DomainArgs),
    /// Name-based UUID using MD5 (version 3)
    V3(NameArgs),
    /// Random UUID (version 4)
    V4(PlainArgs),
    /// Name-based UUID using SHA-1 (version 5)
    V5(NameArgs),
    /// Configuration utilities
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Options shared by every generate command.
#[derive(Args, Debug, Clone)]
pub struct ConnectionArgs {
    /// Path to configuration file (ignored if it does not exist)
    #[arg(short, long, default_value = "gimmeanuuid.toml")]
    pub config: PathBuf,

    /// Override the service base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Override the request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct PlainArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,
}

#[derive(Args, Debug)]
pub struct DomainArgs {
    /// DCE domain: person, group, org or a numeric code
    #[arg(value_parser = parse_domain)]
    pub domain: u32,

    #[command(flatten)]
    pub connection: ConnectionArgs,
}

#[derive(Args, Debug)]
pub struct NameArgs {
    /// Namespace (e.g. dns, url, or a namespace UUID)
    pub namespace: String,

    /// Name to hash within the namespace
    pub name: String,

    #[command(flatten)]
    pub connection: ConnectionArgs,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Initialize a new configuration file
    Init(ConfigInitArgs),
}

#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Output file path
    #[arg(short, long, default_value = "gimmeanuuid.toml")]
    pub output: PathBuf,

    /// Overwrite existing file
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

/// Parse a DCE domain given by name or by decimal code.
pub fn parse_domain(s: &str) -> Result<u32, String> {
    use crate::client::DceDomain;

    match s.to_lowercase().as_str() {
        "person" => Ok(DceDomain::Person.into()),
        "group" => Ok(DceDomain::Group.into()),
        "org" => Ok(DceDomain::Org.into()),
        other => other.parse().map_err(|_| {
            format!(
                "Invalid domain '{}': expected person, group, org or a number",
                s
            )
        }),
    }
}
