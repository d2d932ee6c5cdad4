// fetcher.rs
use crate::scraper::ScraperError;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CONTENT_TYPE, REFERER};
use scraper::Html;
use std::time::Duration;
use tracing::debug;
use url::Url;

const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0 Safari/537.36";

/// Given a URL, hand back a queryable document tree.
pub trait DocumentFetcher: Send + Sync {
    fn fetch(&self, url: &str) -> Result<Html, ScraperError>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self, ScraperError> {
        let mut headers = HeaderMap::new();
        headers.insert(REFERER, HeaderValue::from_static("https://www.google.com/"));
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("text/html,application/xhtml+xml"),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        Ok(Self { client })
    }
}

/// Only absolute http(s) URLs are worth a round trip.
fn parse_listing_url(raw: &str) -> Result<Url, ScraperError> {
    let url = Url::parse(raw).map_err(|e| ScraperError::InvalidUrl(format!("{raw}: {e}")))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ScraperError::InvalidUrl(format!(
            "{raw}: unsupported scheme `{other}`"
        ))),
    }
}

impl DocumentFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Html, ScraperError> {
        let url = parse_listing_url(url)?;

        let resp = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ScraperError::UpstreamStatus(status.as_u16()));
        }

        // A missing Content-Type is tolerated; plenty of listing hosts omit it.
        if let Some(content_type) = resp.headers().get(CONTENT_TYPE) {
            let content_type = content_type.to_str().unwrap_or_default();
            if !content_type.to_ascii_lowercase().contains("html") {
                return Err(ScraperError::NotHtml(content_type.to_string()));
            }
        }

        let text = resp.text().map_err(|e| ScraperError::Body(e.to_string()))?;
        debug!(url = %url, bytes = text.len(), "fetched listing page");

        Ok(Html::parse_document(&text))
    }
}
