use adressen_core::AppConfig;

use crate::fetch::build_pdok_client;

/// Looks up one address and prints it.
pub(crate) async fn run_lookup(
    config: &AppConfig,
    postcode: &str,
    huisnummer: &str,
) -> anyhow::Result<()> {
    let client = build_pdok_client(config)?;
    let address = client.search_address(postcode, huisnummer).await?;

    println!("{}", address.display_name);
    println!("  postcode:   {}", address.postcode);
    println!("  huisnummer: {}", address.house_number);
    println!("  woonplaats: {}", address.town);
    println!("  gemeente:   {}", address.municipality);
    println!("  objecttype: {}", address.object_type);
    println!("  lat, lng:   {}, {}", address.lat, address.lng);
    Ok(())
}
