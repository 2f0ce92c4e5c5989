use crate::errors::{ResultResp, ServerError};
use astra::{Body, ResponseBuilder};
use serde_json::Value;

/// Serialize a JSON body with the right Content-Type.
pub fn json_response(value: &Value) -> ResultResp {
    let body = serde_json::to_string(value).map_err(|_| ServerError::InternalError)?;

    let resp = ResponseBuilder::new()
        .status(200)
        .header("Content-Type", "application/json")
        .body(Body::from(body))
        .map_err(|_| ServerError::InternalError)?;

    Ok(resp)
}

/// Plain text response (the liveness route).
pub fn text_response(text: &str) -> ResultResp {
    let resp = ResponseBuilder::new()
        .status(200)
        .header("Content-Type", "text/plain; charset=utf-8")
        .body(Body::from(text.to_string()))
        .map_err(|_| ServerError::InternalError)?;

    Ok(resp)
}
