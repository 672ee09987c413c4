use serde::{Deserialize, Serialize};

/// BAG object type of the unit an address belongs to.
///
/// Encoded in positions 4-5 of the `adresseerbaarobject_id` returned by PDOK.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectType {
    /// Residential or commercial unit inside a building (code `01`).
    #[default]
    Verblijfsobject,
    /// Berth for a houseboat (code `02`).
    Ligplaats,
    /// Pitch for a caravan or mobile home (code `03`).
    Standplaats,
}

impl ObjectType {
    /// Maps a two-character BAG type code to an object type.
    ///
    /// Unknown codes fall back to [`ObjectType::Verblijfsobject`].
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "02" => Self::Ligplaats,
            "03" => Self::Standplaats,
            _ => Self::Verblijfsobject,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Verblijfsobject => "verblijfsobject",
            Self::Ligplaats => "ligplaats",
            Self::Standplaats => "standplaats",
        }
    }
}

impl std::fmt::Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An address record flattened from a PDOK `adres` document.
///
/// Serialized field names are the CSV header consumed by the windturbine
/// visualisation tool and must not change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedAddress {
    /// Full display name, e.g. `"Dorpsstraat 1, 1394AB Nederhorst den Berg"`.
    #[serde(rename = "adres")]
    pub display_name: String,
    pub postcode: String,
    /// House number including letter and addition (`huis_nlt`), e.g. `"12A"`.
    #[serde(rename = "huisnummer")]
    pub house_number: String,
    #[serde(rename = "straat")]
    pub street: String,
    #[serde(rename = "woonplaats")]
    pub town: String,
    #[serde(rename = "gemeente")]
    pub municipality: String,
    #[serde(rename = "objecttype")]
    pub object_type: ObjectType,
    pub lat: f64,
    pub lng: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_code_maps_known_codes() {
        assert_eq!(ObjectType::from_code("01"), ObjectType::Verblijfsobject);
        assert_eq!(ObjectType::from_code("02"), ObjectType::Ligplaats);
        assert_eq!(ObjectType::from_code("03"), ObjectType::Standplaats);
    }

    #[test]
    fn from_code_defaults_unknown_to_verblijfsobject() {
        assert_eq!(ObjectType::from_code("99"), ObjectType::Verblijfsobject);
        assert_eq!(ObjectType::from_code(""), ObjectType::Verblijfsobject);
    }

    #[test]
    fn object_type_serializes_lowercase() {
        let json = serde_json::to_string(&ObjectType::Ligplaats).unwrap();
        assert_eq!(json, "\"ligplaats\"");
    }

    #[test]
    fn normalized_address_uses_dutch_field_names() {
        let address = NormalizedAddress {
            display_name: "Dorpsstraat 1, 1394AB Nederhorst den Berg".to_owned(),
            postcode: "1394AB".to_owned(),
            house_number: "1".to_owned(),
            street: "Dorpsstraat".to_owned(),
            town: "Nederhorst den Berg".to_owned(),
            municipality: "Wijdemeren".to_owned(),
            object_type: ObjectType::Verblijfsobject,
            lat: 52.26,
            lng: 5.04,
        };
        let value = serde_json::to_value(&address).unwrap();
        assert_eq!(value["adres"], "Dorpsstraat 1, 1394AB Nederhorst den Berg");
        assert_eq!(value["huisnummer"], "1");
        assert_eq!(value["straat"], "Dorpsstraat");
        assert_eq!(value["woonplaats"], "Nederhorst den Berg");
        assert_eq!(value["gemeente"], "Wijdemeren");
        assert_eq!(value["objecttype"], "verblijfsobject");
    }
}
