// responses/cors.rs
use crate::errors::ResultResp;
use crate::errors::ServerError;
use astra::{Body, ResponseBuilder};

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "POST, GET, OPTIONS, PUT, DELETE";
pub const ALLOW_HEADERS: &str = "Content-Type, Content-Length, Accept-Encoding, X-CSRF-Token";

/// Stamp the permissive CORS headers onto a response under construction.
pub fn with_cors(builder: ResponseBuilder) -> ResponseBuilder {
    builder
        .header("Access-Control-Allow-Origin", ALLOW_ORIGIN)
        .header("Access-Control-Allow-Methods", ALLOW_METHODS)
        .header("Access-Control-Allow-Headers", ALLOW_HEADERS)
        .header("Access-Control-Allow-Credentials", "true")
}

/// Answer a browser preflight; no body.
pub fn preflight_response() -> ResultResp {
    with_cors(ResponseBuilder::new().status(204))
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)
}
