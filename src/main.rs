//! Mediashelf CLI entry point.
//!
//! Evaluates dynamic playlist queries and playlist records against JSON
//! entry snapshots exported by the media library server.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use mediashelf::cli;

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    let directive = if args.verbose {
        "mediashelf=debug"
    } else {
        "mediashelf=info"
    };

    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(directive.parse()?))
        .init();

    cli::run_command(&args)
}
