//! CSV export for the windturbine visualisation tool.

use std::path::Path;

use adressen_core::NormalizedAddress;
use anyhow::Context;

/// Writes `addresses` to `path` with a header row, replacing any existing file.
///
/// # Errors
///
/// Returns an error if the file cannot be created or a record cannot be written.
pub(crate) fn write_csv(path: &Path, addresses: &[NormalizedAddress]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    for address in addresses {
        writer
            .serialize(address)
            .with_context(|| format!("failed to write record for {}", address.display_name))?;
    }
    writer.flush()?;
    tracing::info!(path = %path.display(), records = addresses.len(), "wrote CSV");
    Ok(())
}

#[cfg(test)]
mod tests {
    use adressen_core::ObjectType;

    use super::*;

    /// Column order expected by the downstream tool.
    const CSV_HEADER: &str =
        "adres,postcode,huisnummer,straat,woonplaats,gemeente,objecttype,lat,lng";

    fn address(name: &str, object_type: ObjectType) -> NormalizedAddress {
        NormalizedAddress {
            display_name: name.to_owned(),
            postcode: "1394AB".to_owned(),
            house_number: "12A".to_owned(),
            street: "Dorpsstraat".to_owned(),
            town: "Nederhorst den Berg".to_owned(),
            municipality: "Wijdemeren".to_owned(),
            object_type,
            lat: 52.26,
            lng: 5.04,
        }
    }

    #[test]
    fn write_csv_emits_fixed_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_csv(&path, &[address("Dorpsstraat 12A", ObjectType::Verblijfsobject)]).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().next(), Some(CSV_HEADER));
    }

    #[test]
    fn write_csv_writes_one_row_per_address() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_csv(
            &path,
            &[
                address("Dorpsstraat 12A", ObjectType::Verblijfsobject),
                address("Jachthaven 4", ObjectType::Ligplaats),
            ],
        )
        .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[1],
            "Dorpsstraat 12A,1394AB,12A,Dorpsstraat,Nederhorst den Berg,Wijdemeren,verblijfsobject,52.26,5.04"
        );
        assert!(lines[2].contains(",ligplaats,"));
    }

    #[test]
    fn write_csv_quotes_fields_with_commas() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_csv(
            &path,
            &[address(
                "Dorpsstraat 1, 1394AB Nederhorst den Berg",
                ObjectType::Verblijfsobject,
            )],
        )
        .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents
            .lines()
            .nth(1)
            .unwrap()
            .starts_with("\"Dorpsstraat 1, 1394AB Nederhorst den Berg\","));
    }
}
