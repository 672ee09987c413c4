//! Normalization from raw PDOK documents to [`adressen_core::NormalizedAddress`].
//!
//! A document is only turned into an address when it is an `adres` result
//! with a usable `POINT(<lng> <lat>)` centroid. Everything else is dropped.

use std::sync::LazyLock;

use adressen_core::{NormalizedAddress, ObjectType};
use regex::Regex;

use crate::error::PdokError;
use crate::types::RawDocument;

/// Discriminant value PDOK uses for address results.
pub const ADDRESS_DOC_TYPE: &str = "adres";

static POINT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"POINT\(([^ ]+) ([^ ]+)\)").expect("valid point regex"));

/// Normalizes a raw [`RawDocument`] into a [`NormalizedAddress`].
///
/// Returns `Ok(None)` when the document is not an address, has no centroid,
/// or the centroid is not shaped like `POINT(x y)`. Missing text fields become
/// empty strings.
///
/// # Errors
///
/// Returns [`PdokError::Normalization`] if the centroid has the right shape
/// but one of its tokens is not a number.
pub fn normalize_document(doc: RawDocument) -> Result<Option<NormalizedAddress>, PdokError> {
    if doc.doc_type.as_deref() != Some(ADDRESS_DOC_TYPE) {
        return Ok(None);
    }

    let Some(centroid) = doc.centroide_ll.as_deref().filter(|c| !c.is_empty()) else {
        return Ok(None);
    };

    let Some((lng_token, lat_token)) = split_point(centroid) else {
        return Ok(None);
    };

    let display_name = doc.weergavenaam.unwrap_or_default();
    let lng = parse_coordinate(lng_token, "longitude", &display_name)?;
    let lat = parse_coordinate(lat_token, "latitude", &display_name)?;

    let object_type = classify_object_type(doc.adresseerbaarobject_id.as_deref());

    Ok(Some(NormalizedAddress {
        display_name,
        postcode: doc.postcode.unwrap_or_default(),
        house_number: doc.huis_nlt.unwrap_or_default(),
        street: doc.straatnaam.unwrap_or_default(),
        town: doc.woonplaatsnaam.unwrap_or_default(),
        municipality: doc.gemeentenaam.unwrap_or_default(),
        object_type,
        lat,
        lng,
    }))
}

/// Derives the BAG object type from characters 4-5 of the object identifier.
///
/// Identifiers shorter than six characters, or absent, classify as
/// [`ObjectType::Verblijfsobject`].
#[must_use]
pub fn classify_object_type(object_id: Option<&str>) -> ObjectType {
    let Some(id) = object_id else {
        return ObjectType::Verblijfsobject;
    };
    if id.chars().count() < 6 {
        return ObjectType::Verblijfsobject;
    }
    let code: String = id.chars().skip(4).take(2).collect();
    ObjectType::from_code(&code)
}

/// Returns the `(longitude, latitude)` tokens of a WKT point, in source order.
fn split_point(centroid: &str) -> Option<(&str, &str)> {
    let caps = POINT_RE.captures(centroid)?;
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}

fn parse_coordinate(token: &str, axis: &str, display_name: &str) -> Result<f64, PdokError> {
    token.parse::<f64>().map_err(|e| PdokError::Normalization {
        document: display_name.to_owned(),
        reason: format!("{axis} token \"{token}\" is not a number: {e}"),
    })
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
