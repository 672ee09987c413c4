//! Single-address lookup by postcode and house number.

use adressen_core::NormalizedAddress;

use crate::error::PdokError;
use crate::normalize::normalize_document;
use crate::pagination::QueryBatch;
use crate::query::{SearchQuery, ADDRESS_FILTER};

use super::PdokClient;

/// Latitude range of the Netherlands' bounding box (WGS84).
const NL_LAT: (f64, f64) = (50.0, 54.0);
/// Longitude range of the Netherlands' bounding box (WGS84).
const NL_LNG: (f64, f64) = (3.0, 8.0);

impl PdokClient {
    /// Looks up one address by postcode and house number.
    ///
    /// Whitespace is stripped from `postcode` and it is upper-cased before
    /// searching. The first `adres` hit is returned.
    ///
    /// # Errors
    ///
    /// - [`PdokError::AddressNotFound`] if PDOK returns no documents.
    /// - [`PdokError::InvalidCoordinates`] if the first hit has no usable centroid.
    /// - [`PdokError::OutsideNetherlands`] if the coordinates fall outside the
    ///   Dutch bounding box.
    /// - Any error from [`Self::fetch_page`] or [`normalize_document`].
    pub async fn search_address(
        &self,
        postcode: &str,
        house_number: &str,
    ) -> Result<NormalizedAddress, PdokError> {
        let postcode = clean_postcode(postcode);
        let house_number = house_number.trim();
        let query = SearchQuery {
            q: format!("{postcode} {house_number}"),
            rows: Some(1),
            filters: vec![ADDRESS_FILTER.to_owned()],
        };
        let batch = QueryBatch::new(&query);

        let not_found = || PdokError::AddressNotFound {
            postcode: postcode.clone(),
            house_number: house_number.to_owned(),
        };

        let page = self.fetch_page(&batch).await?.ok_or_else(not_found)?;
        let first = page.docs.into_iter().next().ok_or_else(not_found)?;
        let display_name = first.weergavenaam.clone().unwrap_or_default();

        let address = normalize_document(first)?
            .ok_or(PdokError::InvalidCoordinates { display_name })?;

        if !in_netherlands(address.lat, address.lng) {
            return Err(PdokError::OutsideNetherlands {
                lat: address.lat,
                lng: address.lng,
            });
        }

        Ok(address)
    }
}

fn clean_postcode(postcode: &str) -> String {
    postcode
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase()
}

fn in_netherlands(lat: f64, lng: f64) -> bool {
    (NL_LAT.0..=NL_LAT.1).contains(&lat) && (NL_LNG.0..=NL_LNG.1).contains(&lng)
}
