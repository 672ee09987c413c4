use std::collections::HashSet;

use adressen_core::NormalizedAddress;

/// Drops every address whose display name was already seen, keeping the first.
///
/// Order of the surviving records is the input order.
#[must_use]
pub fn dedup_by_display_name(addresses: Vec<NormalizedAddress>) -> Vec<NormalizedAddress> {
    let mut seen: HashSet<String> = HashSet::with_capacity(addresses.len());
    addresses
        .into_iter()
        .filter(|a| seen.insert(a.display_name.clone()))
        .collect()
}
