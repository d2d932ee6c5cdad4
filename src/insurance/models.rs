use serde::{Deserialize, Deserializer};

/// Period requested from the rate service; the record stores monthly figures.
pub const RATE_PERIOD: &str = "mo";

/// Query fields sent to `get_estimates`, already formatted as strings.
/// Empty strings mean the page didn't expose that fact.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RateQuery {
    pub zip: String,
    pub sqft: String,
    /// Estimated price, whole dollars.
    pub est: String,
    pub pid: String,
    pub year: String,
}

// {
//   "status": "success",
//   "title": "...",
//   "icon": "...",
//   "link_text": "...",
//   "link_ref": "...",
//   "rate": 87,
//   "per": "mo",
//   "errors": []
// }
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct InsuranceEstimate {
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub icon: String,
    #[serde(deserialize_with = "null_as_default")]
    pub link_text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub link_ref: String,
    pub rate: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub per: String,
    #[serde(deserialize_with = "null_as_default")]
    pub errors: Vec<String>,
}

// The service sends `null` for fields it has nothing to say about.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
