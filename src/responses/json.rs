// responses/json.rs
use crate::errors::{ResultResp, ServerError};
use crate::responses::with_cors;
use astra::{Body, ResponseBuilder};
use serde::Serialize;

/// Serialize `value` as the 200 JSON body.
pub fn json_response<T: Serialize>(value: &T) -> ResultResp {
    let body = serde_json::to_vec(value).map_err(|_| ServerError::InternalError)?;

    with_cors(ResponseBuilder::new().status(200))
        .header("Content-Type", mime::APPLICATION_JSON.as_ref())
        .body(Body::from(body))
        .map_err(|_| ServerError::InternalError)
}
