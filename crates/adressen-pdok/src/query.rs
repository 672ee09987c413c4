//! Query construction for the two collection modes.
//!
//! PDOK's `free` endpoint takes a Solr free-text query in `q` plus any number
//! of `fq` filter clauses. Multiple `fq` clauses are ANDed by the server.

use adressen_core::QueryMode;

/// Page size used when a query does not set one.
pub const DEFAULT_ROWS: u32 = 100;

/// Filter clause restricting results to address documents.
pub const ADDRESS_FILTER: &str = "type:adres";

/// Base parameters and filter clauses for one paginated search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Free-text query (`q`).
    pub q: String,
    /// Requested page size (`rows`). `None` means [`DEFAULT_ROWS`].
    pub rows: Option<u32>,
    /// Filter clauses (`fq`), all of which must match.
    pub filters: Vec<String>,
}

impl SearchQuery {
    /// Addresses whose postcode starts with `prefix`.
    #[must_use]
    pub fn by_postal_code(prefix: &str, rows: u32) -> Self {
        Self {
            q: format!("postcode:{prefix}*"),
            rows: Some(rows),
            filters: vec![ADDRESS_FILTER.to_owned()],
        }
    }

    /// Addresses in the town named exactly `town`.
    #[must_use]
    pub fn by_town(town: &str, rows: u32) -> Self {
        Self {
            q: "*".to_owned(),
            rows: Some(rows),
            filters: vec![
                ADDRESS_FILTER.to_owned(),
                format!("woonplaatsnaam:\"{town}\""),
            ],
        }
    }

    /// Builds the query for `term` under `mode`.
    #[must_use]
    pub fn for_mode(mode: QueryMode, term: &str, rows: u32) -> Self {
        match mode {
            QueryMode::ByPostalCode => Self::by_postal_code(term, rows),
            QueryMode::ByTown => Self::by_town(term, rows),
        }
    }

    #[must_use]
    pub fn page_size(&self) -> u32 {
        self.rows.filter(|r| *r > 0).unwrap_or(DEFAULT_ROWS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn by_postal_code_uses_wildcard_suffix() {
        let query = SearchQuery::by_postal_code("1394", 100);
        assert_eq!(query.q, "postcode:1394*");
        assert_eq!(query.filters, vec!["type:adres".to_owned()]);
    }

    #[test]
    fn by_town_quotes_the_town_name() {
        let query = SearchQuery::by_town("Nederhorst den Berg", 100);
        assert_eq!(query.q, "*");
        assert_eq!(
            query.filters,
            vec![
                "type:adres".to_owned(),
                "woonplaatsnaam:\"Nederhorst den Berg\"".to_owned()
            ]
        );
    }

    #[test]
    fn for_mode_dispatches_on_mode() {
        assert_eq!(
            SearchQuery::for_mode(QueryMode::ByPostalCode, "1231", 50),
            SearchQuery::by_postal_code("1231", 50)
        );
        assert_eq!(
            SearchQuery::for_mode(QueryMode::ByTown, "Vreeland", 50),
            SearchQuery::by_town("Vreeland", 50)
        );
    }

    #[test]
    fn page_size_defaults_to_100() {
        let query = SearchQuery {
            q: "*".to_owned(),
            rows: None,
            filters: Vec::new(),
        };
        assert_eq!(query.page_size(), 100);
    }

    #[test]
    fn page_size_treats_zero_as_unset() {
        let query = SearchQuery {
            q: "*".to_owned(),
            rows: Some(0),
            filters: Vec::new(),
        };
        assert_eq!(query.page_size(), DEFAULT_ROWS);
    }

    #[test]
    fn page_size_uses_explicit_rows() {
        assert_eq!(SearchQuery::by_town("Vreeland", 25).page_size(), 25);
    }
}
