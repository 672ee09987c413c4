//! Offset-based pagination state for PDOK searches.
//!
//! PDOK pages with Solr-style `start`/`rows` parameters and reports the total
//! hit count as `numFound`. A [`QueryBatch`] tracks the running offset for one
//! query term and decides when the last page has been fetched.
//!
//! The first `numFound` also fixes a page limit of `ceil(numFound / rows) + 1`
//! for the rest of the term, so a server whose total keeps growing cannot keep
//! the loop alive forever.

use crate::query::SearchQuery;

/// Pagination state for one query term. Created per term, dropped when done.
#[derive(Debug)]
pub struct QueryBatch<'a> {
    query: &'a SearchQuery,
    start: u64,
    rows: u32,
    num_found: u64,
    page_limit: Option<u64>,
}

impl<'a> QueryBatch<'a> {
    #[must_use]
    pub fn new(query: &'a SearchQuery) -> Self {
        Self {
            query,
            start: 0,
            rows: query.page_size(),
            num_found: 0,
            page_limit: None,
        }
    }

    #[must_use]
    pub fn query(&self) -> &SearchQuery {
        self.query
    }

    #[must_use]
    pub fn start(&self) -> u64 {
        self.start
    }

    #[must_use]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Last `numFound` reported by the server, `0` before the first page.
    #[must_use]
    pub fn num_found(&self) -> u64 {
        self.num_found
    }

    /// Maximum number of pages for this term, derived from the first
    /// `numFound`. `None` until the first page has been consumed.
    #[must_use]
    pub fn page_limit(&self) -> Option<u64> {
        self.page_limit
    }

    /// 1-based number of the page the current offset points at.
    #[must_use]
    pub fn batch_number(&self) -> u64 {
        self.start / u64::from(self.rows) + 1
    }

    /// Query parameters for the current page, in request order.
    ///
    /// Filter clauses are emitted as repeated `fq` pairs.
    #[must_use]
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("q", self.query.q.clone()),
            ("rows", self.rows.to_string()),
            ("start", self.start.to_string()),
        ];
        params.extend(self.query.filters.iter().map(|fq| ("fq", fq.clone())));
        params
    }

    /// Records the server's `numFound` for the page just consumed and moves
    /// the offset forward by one page.
    ///
    /// Returns `true` while the new offset is still below `num_found`.
    pub fn advance(&mut self, num_found: u64) -> bool {
        if self.page_limit.is_none() {
            self.page_limit = Some(num_found.div_ceil(u64::from(self.rows)).saturating_add(1));
        }
        self.num_found = num_found;
        self.start = self.start.saturating_add(u64::from(self.rows));
        self.start < self.num_found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(rows: u32) -> SearchQuery {
        SearchQuery {
            q: "postcode:1394*".to_owned(),
            rows: Some(rows),
            filters: vec!["type:adres".to_owned()],
        }
    }

    #[test]
    fn new_batch_starts_at_zero() {
        let q = query(100);
        let batch = QueryBatch::new(&q);
        assert_eq!(batch.start(), 0);
        assert_eq!(batch.rows(), 100);
        assert_eq!(batch.batch_number(), 1);
    }

    #[test]
    fn params_include_offset_and_every_filter() {
        let q = SearchQuery {
            q: "*".to_owned(),
            rows: Some(50),
            filters: vec![
                "type:adres".to_owned(),
                "woonplaatsnaam:\"Vreeland\"".to_owned(),
            ],
        };
        let mut batch = QueryBatch::new(&q);
        batch.advance(500);
        assert_eq!(
            batch.params(),
            vec![
                ("q", "*".to_owned()),
                ("rows", "50".to_owned()),
                ("start", "50".to_owned()),
                ("fq", "type:adres".to_owned()),
                ("fq", "woonplaatsnaam:\"Vreeland\"".to_owned()),
            ]
        );
    }

    #[test]
    fn advance_stops_when_offset_reaches_num_found() {
        let q = query(100);
        let mut batch = QueryBatch::new(&q);
        assert!(batch.advance(250));
        assert!(batch.advance(250));
        assert!(!batch.advance(250));
        assert_eq!(batch.start(), 300);
    }

    #[test]
    fn advance_stops_on_exact_multiple() {
        let q = query(100);
        let mut batch = QueryBatch::new(&q);
        assert!(batch.advance(200));
        assert!(!batch.advance(200));
    }

    #[test]
    fn advance_stops_immediately_when_num_found_is_zero() {
        let q = query(100);
        let mut batch = QueryBatch::new(&q);
        assert!(!batch.advance(0));
    }

    #[test]
    fn page_count_is_bounded_by_ceil_num_found_over_rows() {
        for (num_found, rows) in [(1_u64, 100_u32), (99, 100), (100, 100), (101, 100), (1234, 7)] {
            let q = query(rows);
            let mut batch = QueryBatch::new(&q);
            let mut pages = 1_u64;
            while batch.advance(num_found) {
                pages += 1;
            }
            let expected = num_found.div_ceil(u64::from(rows));
            assert_eq!(pages, expected, "num_found={num_found} rows={rows}");
        }
    }

    #[test]
    fn page_limit_is_fixed_by_first_num_found() {
        let q = query(100);
        let mut batch = QueryBatch::new(&q);
        assert_eq!(batch.page_limit(), None);
        batch.advance(250);
        assert_eq!(batch.page_limit(), Some(4));
        batch.advance(100_000);
        assert_eq!(batch.page_limit(), Some(4));
    }

    #[test]
    fn page_limit_scales_with_page_size() {
        let q = query(1);
        let mut batch = QueryBatch::new(&q);
        batch.advance(1001);
        assert_eq!(batch.page_limit(), Some(1002));
    }

    #[test]
    fn batch_number_follows_offset() {
        let q = query(100);
        let mut batch = QueryBatch::new(&q);
        batch.advance(1000);
        batch.advance(1000);
        assert_eq!(batch.batch_number(), 3);
    }
}
