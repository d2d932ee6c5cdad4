// src/domain/property.rs

use serde::Serialize;

/// One listing page flattened into the fields the calculator front end consumes.
///
/// Every field defaults to its zero value, which means "not found on the page".
/// `price` additionally carries [`OFF_MARKET`](super::OFF_MARKET) (`-1`) when the
/// listing explicitly says so, so callers can tell "unknown" from "off market".
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRecord {
    pub address: String,
    pub price: f64,
    pub monthly_rent: f64,
    pub monthly_hoa: f64,
    /// Monthly share of the annual property tax.
    pub monthly_tax: f64,
    pub monthly_insurance: i64,
    /// Signed: positive for rising neighborhood values, negative for falling.
    pub yearly_appreciation_rate: f64,
    pub year_built: u32,
}
