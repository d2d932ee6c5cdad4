// listing_scraper.rs
use crate::domain::PropertyRecord;
use crate::insurance::RateLookup;
use crate::scraper::{extract, DocumentFetcher, ScraperError};
use std::time::Instant;
use tracing::info;

/// Fetch one listing page and turn it into a [`PropertyRecord`].
///
/// Holds no per-request state, so one instance is shared by every worker.
pub struct ListingScraper {
    fetcher: Box<dyn DocumentFetcher>,
    rates: Box<dyn RateLookup>,
}

impl ListingScraper {
    pub fn new(fetcher: Box<dyn DocumentFetcher>, rates: Box<dyn RateLookup>) -> Self {
        Self { fetcher, rates }
    }

    /// Only the fetch can fail; extraction is best-effort.
    pub fn scrape(&self, url: &str) -> Result<PropertyRecord, ScraperError> {
        let start = Instant::now();

        let document = self.fetcher.fetch(url)?;
        let record = extract(&document, self.rates.as_ref());

        info!(
            url,
            price = record.price,
            insurance = record.monthly_insurance,
            elapsed = ?start.elapsed(),
            "listing extracted"
        );

        Ok(record)
    }
}
