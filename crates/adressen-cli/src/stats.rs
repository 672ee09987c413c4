//! End-of-run statistics over the deduplicated addresses.

use std::collections::BTreeMap;
use std::fmt;

use adressen_core::{NormalizedAddress, ObjectType};

const RULE: &str = "============================================================";

#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct TownCount {
    pub total: usize,
    pub ligplaatsen: usize,
}

#[derive(Debug, Default)]
pub(crate) struct Stats {
    /// Keyed by type name so iteration is alphabetical.
    pub by_type: BTreeMap<&'static str, usize>,
    pub by_town: BTreeMap<String, TownCount>,
}

pub(crate) fn compute(addresses: &[NormalizedAddress]) -> Stats {
    let mut stats = Stats::default();
    for address in addresses {
        *stats.by_type.entry(address.object_type.as_str()).or_default() += 1;
        let town = stats.by_town.entry(address.town.clone()).or_default();
        town.total += 1;
        if address.object_type == ObjectType::Ligplaats {
            town.ligplaatsen += 1;
        }
    }
    stats
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n{RULE}\nSTATISTIEKEN\n{RULE}")?;

        writeln!(f, "\nAantal per objecttype:")?;
        for (object_type, count) in &self.by_type {
            writeln!(f, "  {object_type}: {count}")?;
        }

        writeln!(f, "\nAantal adressen per woonplaats:")?;
        for (town, count) in &self.by_town {
            if count.ligplaatsen > 0 {
                writeln!(
                    f,
                    "  {town}: {} (waarvan {} ligplaatsen)",
                    count.total, count.ligplaatsen
                )?;
            } else {
                writeln!(f, "  {town}: {}", count.total)?;
            }
        }

        writeln!(f, "\n{RULE}")
    }
}
