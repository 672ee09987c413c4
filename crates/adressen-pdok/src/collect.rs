//! Per-term collection across a list of postcodes or towns.
//!
//! Each term gets its own paginated fetch. A failing term is reported and
//! skipped; it never aborts the remaining terms.

use adressen_core::{NormalizedAddress, ObjectType, QueryMode};

use crate::client::PdokClient;
use crate::query::SearchQuery;
use crate::rate_limit::courtesy_pause;

/// Result of fetching one query term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermOutcome {
    Fetched {
        count: usize,
        ligplaatsen: usize,
        standplaatsen: usize,
    },
    Failed {
        reason: String,
    },
}

/// Outcome of one query term, kept for the end-of-run summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermReport {
    pub term: String,
    pub mode: QueryMode,
    pub outcome: TermOutcome,
}

impl TermReport {
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self.outcome, TermOutcome::Failed { .. })
    }

    /// One-line human summary, e.g. `"12 adressen toegevoegd (waarvan 2 ligplaatsen)"`
    /// for a postcode or `"Totaal 12 adressen in Vreeland"` for a town.
    #[must_use]
    pub fn summary(&self) -> String {
        match &self.outcome {
            TermOutcome::Fetched {
                count,
                ligplaatsen,
                standplaatsen,
            } => {
                let mut extra = Vec::new();
                if *ligplaatsen > 0 {
                    extra.push(format!("{ligplaatsen} ligplaatsen"));
                }
                if *standplaatsen > 0 {
                    extra.push(format!("{standplaatsen} standplaatsen"));
                }
                let breakdown = if extra.is_empty() {
                    String::new()
                } else {
                    format!(" (waarvan {})", extra.join(", "))
                };
                match self.mode {
                    QueryMode::ByPostalCode => format!("{count} adressen toegevoegd{breakdown}"),
                    QueryMode::ByTown => {
                        format!("Totaal {count} adressen in {}{breakdown}", self.term)
                    }
                }
            }
            TermOutcome::Failed { reason } => format!("Fout bij ophalen: {reason}"),
        }
    }
}

/// Addresses merged across all terms, in encounter order, plus per-term reports.
#[derive(Debug, Default)]
pub struct CollectionResult {
    pub addresses: Vec<NormalizedAddress>,
    pub reports: Vec<TermReport>,
}

impl CollectionResult {
    #[must_use]
    pub fn failed_terms(&self) -> usize {
        self.reports.iter().filter(|r| r.is_failed()).count()
    }
}

/// Fetches addresses for every term under `mode`, one term after another.
///
/// `page_size` is the `rows` value sent with each request.
/// `delay_ms` is awaited between page requests and between terms.
pub async fn collect_addresses(
    client: &PdokClient,
    mode: QueryMode,
    terms: &[String],
    page_size: u32,
    delay_ms: u64,
) -> CollectionResult {
    let mut result = CollectionResult::default();

    for (idx, term) in terms.iter().enumerate() {
        if idx > 0 {
            courtesy_pause(delay_ms).await;
        }

        tracing::info!(%mode, term = %term, "fetching addresses");
        let query = SearchQuery::for_mode(mode, term, page_size);

        let outcome = match client.fetch_all_addresses(&query, delay_ms).await {
            Ok(addresses) => {
                let outcome = summarize(&addresses);
                result.addresses.extend(addresses);
                outcome
            }
            Err(e) => {
                tracing::warn!(term = %term, error = %e, "failed to fetch addresses for term");
                TermOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        };

        let report = TermReport {
            term: term.clone(),
            mode,
            outcome,
        };
        tracing::info!(term = %term, "{}", report.summary());
        result.reports.push(report);
    }

    if result.failed_terms() > 0 {
        tracing::warn!(
            failed_terms = result.failed_terms(),
            total_terms = terms.len(),
            "some terms failed during collection"
        );
    }

    result
}

fn summarize(addresses: &[NormalizedAddress]) -> TermOutcome {
    let count_of =
        |kind: ObjectType| addresses.iter().filter(|a| a.object_type == kind).count();
    TermOutcome::Fetched {
        count: addresses.len(),
        ligplaatsen: count_of(ObjectType::Ligplaats),
        standplaatsen: count_of(ObjectType::Standplaats),
    }
}
