use crate::domain::{interpret_appreciation, PropertyRecord};
use crate::insurance::{estimate_insurance, ListingFacts, RateLookup};
use crate::scraper::extractors;
use scraper::Html;
use tracing::debug;

/// Run every field extractor over one listing page and assemble the record.
///
/// Extractors are independent; a field that can't be found stays at its zero
/// value. The insurance lookup runs once price, zip, sqft, id and year are
/// known, then the neighborhood trend is interpreted.
pub fn extract(document: &Html, rates: &dyn RateLookup) -> PropertyRecord {
    let year_built = extractors::year_built(document);

    let mut record = PropertyRecord {
        address: extractors::address(document).unwrap_or_default(),
        price: extractors::price(document),
        monthly_rent: extractors::monthly_rent(document).unwrap_or(0.0),
        monthly_hoa: extractors::monthly_hoa(document).unwrap_or(0.0),
        monthly_tax: extractors::monthly_tax(document).unwrap_or(0.0),
        year_built: year_built.unwrap_or(0),
        ..Default::default()
    };

    if record.address.is_empty() {
        debug!("no address header on page");
    }

    let zip = extractors::zip_code(document).unwrap_or_default();
    let sqft = extractors::square_feet(document).unwrap_or_default();
    let property_id = extractors::property_id(document).unwrap_or_default();

    record.monthly_insurance = estimate_insurance(
        &ListingFacts {
            zip: &zip,
            sqft: &sqft,
            price: record.price,
            property_id: &property_id,
            year_built,
        },
        rates,
    );

    record.yearly_appreciation_rate = extractors::neighborhood_text(document)
        .map(|text| interpret_appreciation(&text))
        .unwrap_or(0.0);

    record
}
