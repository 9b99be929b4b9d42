//! Query evaluation and validation commands.

use std::path::Path;
use tracing::{info, warn};

use crate::cli::input::{read_entries, read_query};
use crate::cli::output::render;
use crate::config::Config;
use crate::evaluator::Evaluator;

/// Evaluate a query file against an entries file and print the result
pub fn cmd_query(
    config: &Config,
    query_path: &Path,
    entries_path: &Path,
    limit: Option<i64>,
) -> anyhow::Result<()> {
    let mut query = read_query(query_path)?;
    if let Some(limit) = limit {
        query = query.to_builder().limit(limit).build();
    }

    if config.validation.strict {
        query.ensure_valid()?;
    } else {
        for issue in query.validate() {
            warn!("Evaluating query literally: {}", issue);
        }
    }

    let entries = read_entries(entries_path)?;
    let result = Evaluator::from_config(&config.search).evaluate(&query, &entries);
    info!(
        matched = result.total_count,
        returned = result.len(),
        "Query evaluated"
    );

    println!("{}", render(&result, &config.output)?);
    Ok(())
}

/// Print every suspicious field in a query file
pub fn cmd_validate(query_path: &Path) -> anyhow::Result<()> {
    let query = read_query(query_path)?;
    let issues = query.validate();

    if issues.is_empty() {
        println!("Query is valid.");
        return Ok(());
    }

    println!("Found {} issue(s):", issues.len());
    for issue in &issues {
        println!("  - {}", issue);
    }
    anyhow::bail!("query has {} issue(s)", issues.len())
}
