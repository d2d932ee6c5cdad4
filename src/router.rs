use crate::errors::{ResultResp, ServerError};
use crate::responses::{json_response, preflight_response};
use crate::scraper::ListingScraper;
use astra::Request;
use std::collections::HashMap;
use tracing::{error, info};

const PROPERTY_PATH: &str = "/api/property";

pub fn handle(req: Request, scraper: &ListingScraper) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", PROPERTY_PATH) => get_property(&req, scraper),
        ("OPTIONS", PROPERTY_PATH) => preflight_response(),
        (_, PROPERTY_PATH) => Err(ServerError::MethodNotAllowed),
        _ => Err(ServerError::NotFound),
    }
}

fn get_property(req: &Request, scraper: &ListingScraper) -> ResultResp {
    let params = parse_query(req);
    let url = params
        .get("url")
        .map(|u| u.trim())
        .filter(|u| !u.is_empty())
        .ok_or_else(|| ServerError::BadRequest("missing `url` query parameter".into()))?;

    info!(url, "property lookup requested");

    let record = scraper.scrape(url).map_err(|e| {
        error!(url, error = %e, "listing fetch failed");
        ServerError::from(e)
    })?;

    json_response(&record)
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
