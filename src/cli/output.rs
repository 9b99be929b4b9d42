//! Rendering query results for the terminal.

use serde::Serialize;

use crate::config::{OutputConfig, OutputFormat};
use crate::evaluator::QueryResult;
use crate::model::Entry;

#[derive(Serialize)]
struct ResultView<'r, 'a> {
    total_count: usize,
    entries: &'r [&'a Entry],
}

/// Render a result in the configured format.
pub fn render(result: &QueryResult<'_>, output: &OutputConfig) -> anyhow::Result<String> {
    match output.format {
        OutputFormat::Json => {
            let view = ResultView {
                total_count: result.total_count,
                entries: &result.entries,
            };
            let json = if output.pretty {
                serde_json::to_string_pretty(&view)?
            } else {
                serde_json::to_string(&view)?
            };
            Ok(json)
        }
        OutputFormat::Table => Ok(render_table(result)),
    }
}

fn render_table(result: &QueryResult<'_>) -> String {
    let mut out = format!(
        "{:>6}  {:>6}  {:<12}  {}\n",
        "ID", "RATING", "PLATFORM", "TITLE"
    );
    for entry in &result.entries {
        let rating = entry
            .rating
            .map(|r| format!("{:.1}", r))
            .unwrap_or_else(|| "-".to_string());
        let star = if entry.favorite { "*" } else { "" };
        out.push_str(&format!(
            "{:>6}  {:>6}  {:<12}  {}{}\n",
            entry.id,
            rating,
            entry.platform.as_deref().unwrap_or("-"),
            entry.title,
            star
        ));
    }
    out.push_str(&format!(
        "Showing {} of {} matching entries",
        result.len(),
        result.total_count
    ));
    out
}
