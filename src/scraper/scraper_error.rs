use thiserror::Error;

/// Failures fetching a listing page. Anything past the fetch is best-effort
/// and never produces one of these.
#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("Invalid listing URL: {0}")]
    InvalidUrl(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Listing page returned HTTP {0}")]
    UpstreamStatus(u16),
    #[error("Listing page is not HTML: {0}")]
    NotHtml(String),
    #[error("Failed to read listing page: {0}")]
    Body(String),
}
