// errors.rs
use astra::Response;
use thiserror::Error;

use crate::scraper::ScraperError;

/// Errors originating from either the server logic
/// (routing, bad input, etc.) or downstream layers (listing fetch).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Method Not Allowed")]
    MethodNotAllowed,
    #[error("Upstream Error: {0}")]
    Upstream(String),
    #[error("Internal Server Error")]
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::MethodNotAllowed => 405,
            ServerError::Upstream(_) => 502,
            ServerError::InternalError => 500,
        }
    }
}

impl From<ScraperError> for ServerError {
    fn from(err: ScraperError) -> Self {
        match &err {
            ScraperError::InvalidUrl(_) => ServerError::BadRequest(err.to_string()),
            other => ServerError::Upstream(other.to_string()),
        }
    }
}
