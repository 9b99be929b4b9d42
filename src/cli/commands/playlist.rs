//! Playlist resolution command.

use std::path::Path;
use tracing::info;

use crate::cli::input::{read_entries, read_text};
use crate::cli::output::render;
use crate::config::Config;
use crate::evaluator::Evaluator;
use crate::playlist::Playlist;

/// Resolve a stored playlist against an entries file and print its contents
pub fn cmd_playlist(config: &Config, playlist_path: &Path, entries_path: &Path) -> anyhow::Result<()> {
    let playlist = Playlist::from_json(&read_text(playlist_path)?)?;
    let entries = read_entries(entries_path)?;

    let result = playlist.resolve(&Evaluator::from_config(&config.search), &entries);
    info!(
        playlist = playlist.id(),
        name = playlist.name(),
        dynamic = playlist.is_dynamic(),
        returned = result.len(),
        "Playlist resolved"
    );

    println!("{}", render(&result, &config.output)?);
    Ok(())
}
