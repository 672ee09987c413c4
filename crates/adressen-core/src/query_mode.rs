use std::str::FromStr;

use crate::CoreError;

/// Towns searched when the caller asks for the town mode without naming any.
pub const DEFAULT_TOWNS: [&str; 5] = [
    "Nederhorst den Berg",
    "Vreeland",
    "Nigtevecht",
    "Loenen aan de Vecht",
    "Kortenhoef",
];

/// How a list of query terms is turned into PDOK searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryMode {
    /// Each term is a postal-code prefix such as `"1394"`.
    ByPostalCode,
    /// Each term is an exact town name such as `"Vreeland"`.
    ByTown,
}

impl std::fmt::Display for QueryMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryMode::ByPostalCode => write!(f, "postcode"),
            QueryMode::ByTown => write!(f, "town"),
        }
    }
}

/// Accepts the menu numbers of the old interactive prompt as well as names.
impl FromStr for QueryMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "postcode" => Ok(QueryMode::ByPostalCode),
            "2" | "town" | "woonplaats" => Ok(QueryMode::ByTown),
            other => Err(CoreError::InvalidQueryMode(other.to_owned())),
        }
    }
}

/// Splits a comma-separated term list, trimming each item and dropping empties.
#[must_use]
pub fn split_terms(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect()
}
