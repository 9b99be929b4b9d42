//! CLI command definitions and dispatch.
//!
//! Each subcommand is implemented in its own submodule:
//! - `query`: Evaluate a query file, or validate one
//! - `playlist`: Resolve a stored playlist record
//! - `config`: Show or initialize the config file

mod config;
mod playlist;
mod query;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{Config, OutputFormat};

pub use config::cmd_config;
pub use playlist::cmd_playlist;
pub use query::{cmd_query, cmd_validate};

/// Mediashelf CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (defaults to the OS config directory)
    #[arg(long, global = true, env = "MEDIASHELF_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate a dynamic playlist query against an entry snapshot
    Query {
        /// Query JSON file ("-" for stdin)
        #[arg(short, long)]
        query: PathBuf,
        /// Entries JSON file (array of entries)
        #[arg(short, long)]
        entries: PathBuf,
        /// Override the query's limit
        #[arg(long, allow_hyphen_values = true)]
        limit: Option<i64>,
        /// Reject suspicious queries instead of evaluating them literally
        #[arg(long)]
        strict: bool,
        /// Output format (overrides config)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Resolve a stored playlist (static or dynamic) against an entry snapshot
    Playlist {
        /// Playlist JSON file ("-" for stdin)
        #[arg(short, long)]
        playlist: PathBuf,
        /// Entries JSON file (array of entries)
        #[arg(short, long)]
        entries: PathBuf,
        /// Output format (overrides config)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Report suspicious fields in a query without evaluating it
    Validate {
        /// Query JSON file ("-" for stdin)
        #[arg(short, long)]
        query: PathBuf,
    },
    /// Show the effective configuration
    Config {
        /// Write a default config file if none exists
        #[arg(long)]
        init: bool,
    },
}

/// Run the parsed CLI command.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let mut config = load_config(cli);

    match &cli.command {
        Commands::Query {
            query,
            entries,
            limit,
            strict,
            format,
        } => {
            apply_format(&mut config, *format);
            config.validation.strict |= *strict;
            cmd_query(&config, query, entries, *limit)
        }
        Commands::Playlist {
            playlist,
            entries,
            format,
        } => {
            apply_format(&mut config, *format);
            cmd_playlist(&config, playlist, entries)
        }
        Commands::Validate { query } => cmd_validate(query),
        Commands::Config { init } => cmd_config(&config, cli.config.as_deref(), *init),
    }
}

// ============================================================================
// Shared helper functions
// ============================================================================

fn load_config(cli: &Cli) -> Config {
    match cli.config {
        Some(ref path) => crate::config::load_from(path),
        None => crate::config::load(),
    }
}

fn apply_format(config: &mut Config, format: Option<OutputFormat>) {
    if let Some(format) = format {
        config.output.format = format;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query_command() {
        let cli = Cli::try_parse_from([
            "mediashelf",
            "query",
            "--query",
            "q.json",
            "--entries",
            "e.json",
            "--limit",
            "-1",
            "--format",
            "table",
        ])
        .unwrap();

        match cli.command {
            Commands::Query {
                limit,
                format,
                strict,
                ..
            } => {
                assert_eq!(limit, Some(-1));
                assert_eq!(format, Some(OutputFormat::Table));
                assert!(!strict);
            }
            _ => panic!("expected query command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["mediashelf", "validate", "-q", "q.json", "--verbose"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Validate { .. }));
    }

    #[test]
    fn test_apply_format_override() {
        let mut config = Config::default();
        apply_format(&mut config, None);
        assert_eq!(config.output.format, OutputFormat::Json);
        apply_format(&mut config, Some(OutputFormat::Table));
        assert_eq!(config.output.format, OutputFormat::Table);
    }
}
