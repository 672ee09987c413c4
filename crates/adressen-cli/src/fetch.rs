//! `fetch` command: collect, deduplicate, export, report.
//!
//! Per-term failures are reported and skipped by
//! [`adressen_pdok::collect_addresses`]; only client construction errors and
//! CSV write errors abort the command.

use std::path::{Path, PathBuf};

use adressen_core::{split_terms, AppConfig, QueryMode, DEFAULT_TOWNS};
use adressen_pdok::{collect_addresses, dedup_by_display_name, PdokClient};

use crate::{export, stats};

pub(crate) fn build_pdok_client(config: &AppConfig) -> anyhow::Result<PdokClient> {
    PdokClient::from_config(config).map_err(|e| anyhow::anyhow!("failed to build PDOK client: {e}"))
}

/// Turns the raw `--terms` value into the list of query terms.
///
/// Town mode without terms falls back to [`DEFAULT_TOWNS`]. Postcode mode
/// requires at least one term.
pub(crate) fn resolve_terms(mode: QueryMode, terms: Option<&str>) -> anyhow::Result<Vec<String>> {
    let terms = terms.map(split_terms).unwrap_or_default();
    if !terms.is_empty() {
        return Ok(terms);
    }
    match mode {
        QueryMode::ByTown => Ok(DEFAULT_TOWNS.iter().map(|t| (*t).to_owned()).collect()),
        QueryMode::ByPostalCode => {
            anyhow::bail!("postcode mode needs at least one postcode, e.g. --terms 1394,1231")
        }
    }
}

/// Runs a full fetch and returns the CSV path when a file was written.
///
/// Returns `Ok(None)` when no addresses were found; no file is created.
pub(crate) async fn run_fetch(
    config: &AppConfig,
    mode: QueryMode,
    terms: Option<&str>,
    output: &Path,
) -> anyhow::Result<Option<PathBuf>> {
    let terms = resolve_terms(mode, terms)?;
    let client = build_pdok_client(config)?;

    let result = collect_addresses(
        &client,
        mode,
        &terms,
        config.page_size,
        config.request_delay_ms,
    )
    .await;

    for report in &result.reports {
        println!("{}: {}", report.term, report.summary());
    }

    let unique = dedup_by_display_name(result.addresses);
    println!("\n{} unieke adressen gevonden", unique.len());

    if unique.is_empty() {
        println!("Geen adressen om op te slaan!");
        return Ok(None);
    }

    export::write_csv(output, &unique)?;
    println!(
        "Klaar! {} adressen opgeslagen als '{}'",
        unique.len(),
        output.display()
    );

    print!("{}", stats::compute(&unique));

    Ok(Some(output.to_path_buf()))
}
