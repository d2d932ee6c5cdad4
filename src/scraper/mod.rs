mod extract;
pub mod extractors;
mod fetcher;
mod listing_scraper;
mod scraper_error;

pub use extract::extract;
pub use fetcher::{DocumentFetcher, HttpFetcher};
pub use listing_scraper::ListingScraper;
pub use scraper_error::ScraperError;
