//! PDOK Locatieserver response types for the `free` search endpoint.
//!
//! ## Envelope
//! The endpoint wraps results in a Solr-style envelope:
//! ```text
//! { "response": { "numFound": 1234, "start": 0, "docs": [ ... ] } }
//! ```
//! Both `response` and `docs` are modelled as optional: a body that parses as
//! JSON but lacks either key is treated as end-of-data by the pagination loop.
//! `numFound` is read leniently: floats and numeric strings are accepted, and
//! anything unusable counts as 0.
//!
//! ## Documents
//! A free-text search can return several result kinds (`adres`, `weg`,
//! `postcode`, `woonplaats`, ...) distinguished by the `type` field. Only the
//! fields consumed by normalization are modelled; everything is optional and
//! unknown fields are ignored.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Top-level body of a `GET /free` response.
#[derive(Debug, Deserialize)]
pub struct SearchEnvelope {
    #[serde(default)]
    pub response: Option<SearchResponseBody>,
}

/// The `response` object inside [`SearchEnvelope`].
#[derive(Debug, Deserialize)]
pub struct SearchResponseBody {
    /// Total number of matching documents across all pages.
    #[serde(rename = "numFound", default, deserialize_with = "lenient_count")]
    pub num_found: u64,

    /// Documents kept as raw JSON so a single odd document cannot fail the page.
    #[serde(default)]
    pub docs: Option<Vec<serde_json::Value>>,
}

/// Reads a count that may arrive as an integer, a float or a numeric string.
/// Anything else counts as 0.
fn lenient_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(count_from_value(&value))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn count_from_value(value: &Value) -> u64 {
    let as_whole = |f: f64| (f.is_finite() && f >= 0.0).then(|| f as u64);
    match value {
        Value::Number(n) => n.as_u64().or_else(|| n.as_f64().and_then(as_whole)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<u64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(as_whole))
        }
        _ => None,
    }
    .unwrap_or(0)
}

/// A single result document.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct RawDocument {
    /// Result kind; address records carry `"adres"`.
    #[serde(rename = "type", default)]
    pub doc_type: Option<String>,

    /// Human-readable label, e.g. `"Dorpsstraat 1, 1394AB Nederhorst den Berg"`.
    #[serde(default)]
    pub weergavenaam: Option<String>,

    #[serde(default)]
    pub postcode: Option<String>,

    /// House number with letter and addition, e.g. `"12A"` or `"3-bis"`.
    #[serde(default)]
    pub huis_nlt: Option<String>,

    #[serde(default)]
    pub straatnaam: Option<String>,

    #[serde(default)]
    pub woonplaatsnaam: Option<String>,

    #[serde(default)]
    pub gemeentenaam: Option<String>,

    /// WGS84 centroid as WKT, e.g. `"POINT(5.04 52.26)"` (longitude first).
    #[serde(default)]
    pub centroide_ll: Option<String>,

    /// 16-digit BAG identifier; characters 4-5 encode the object type.
    #[serde(default)]
    pub adresseerbaarobject_id: Option<String>,
}

/// One decoded page of search results.
#[derive(Debug, Default)]
pub struct SearchPage {
    pub docs: Vec<RawDocument>,
    /// Documents the server returned, including any that failed to decode.
    pub returned: usize,
    pub num_found: u64,
}
