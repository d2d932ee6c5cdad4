use crate::insurance::{RateLookup, RateQuery};
use tracing::{debug, warn};

/// Facts pulled off the listing page that the rate service needs.
#[derive(Debug, Clone, Copy)]
pub struct ListingFacts<'a> {
    pub zip: &'a str,
    pub sqft: &'a str,
    pub price: f64,
    pub property_id: &'a str,
    pub year_built: Option<u32>,
}

impl ListingFacts<'_> {
    fn to_query(self) -> RateQuery {
        RateQuery {
            zip: self.zip.to_string(),
            sqft: self.sqft.to_string(),
            est: format!("{:.0}", self.price.max(0.0)),
            pid: self.property_id.to_string(),
            year: self.year_built.map(|y| y.to_string()).unwrap_or_default(),
        }
    }
}

/// Monthly insurance estimate for a listing, or 0.
///
/// Unknown and off-market prices never reach the rate service. Any lookup
/// failure is logged and reported as 0; it never fails the request.
pub fn estimate_insurance(facts: &ListingFacts, rates: &dyn RateLookup) -> i64 {
    if facts.price <= 0.0 {
        debug!(price = facts.price, "skipping insurance lookup");
        return 0;
    }

    let query = facts.to_query();
    match rates.lookup(&query) {
        Ok(estimate) => estimate.rate,
        Err(e) => {
            warn!(zip = %query.zip, pid = %query.pid, error = %e, "insurance lookup failed");
            0
        }
    }
}
