//! Command-line interface for mediashelf.
//!
//! This module provides CLI commands for evaluating dynamic playlist queries
//! and playlists against JSON entry snapshots exported by the library server.

mod commands;
mod input;
mod output;

pub use commands::{Cli, Commands, run_command};
pub use input::{read_entries, read_query, read_text};
