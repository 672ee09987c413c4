//! Multi-page address fetch loop for `PdokClient`.

use adressen_core::NormalizedAddress;

use crate::error::PdokError;
use crate::normalize::normalize_document;
use crate::pagination::QueryBatch;
use crate::query::SearchQuery;
use crate::rate_limit::courtesy_pause;

use super::PdokClient;

impl PdokClient {
    /// Fetches and normalizes every address matching `query`.
    ///
    /// Pages through the result set from offset 0 until the server returns an
    /// empty page, the offset reaches the reported `numFound`, or the body
    /// lacks the expected envelope. Documents that do not normalize to an
    /// address are dropped.
    ///
    /// `inter_request_delay_ms` is awaited between page requests (not before
    /// the first).
    ///
    /// **All-or-nothing semantics**: if any page fails, addresses from earlier
    /// pages of this query are discarded and the error is returned.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Self::fetch_page`] and
    /// [`normalize_document`]. Returns [`PdokError::PaginationLimit`] if the
    /// number of pages exceeds the limit fixed by the first page's `numFound`
    /// (see [`QueryBatch::page_limit`]).
    pub async fn fetch_all_addresses(
        &self,
        query: &SearchQuery,
        inter_request_delay_ms: u64,
    ) -> Result<Vec<NormalizedAddress>, PdokError> {
        let mut addresses: Vec<NormalizedAddress> = Vec::new();
        let mut batch = QueryBatch::new(query);
        let mut page_count = 0u64;

        loop {
            page_count += 1;
            if let Some(max_pages) = batch.page_limit() {
                if page_count > max_pages {
                    return Err(PdokError::PaginationLimit {
                        query: query.q.clone(),
                        max_pages,
                    });
                }
            }

            if page_count > 1 {
                courtesy_pause(inter_request_delay_ms).await;
            }

            let Some(page) = self.fetch_page(&batch).await? else {
                break;
            };

            if page.returned == 0 {
                tracing::debug!(
                    q = %query.q,
                    start = batch.start(),
                    "empty page; end of results"
                );
                break;
            }

            tracing::info!(
                q = %query.q,
                batch = batch.batch_number(),
                results = page.returned,
                num_found = page.num_found,
                "fetched PDOK batch"
            );

            for doc in page.docs {
                if let Some(address) = normalize_document(doc)? {
                    addresses.push(address);
                }
            }

            if !batch.advance(page.num_found) {
                break;
            }
        }

        Ok(addresses)
    }
}
