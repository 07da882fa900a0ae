use lambda_http::{http::StatusCode, Body, Error, Response};
use serde::Serialize;

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

pub fn json_response<T: Serialize + ?Sized>(
    status: StatusCode,
    value: &T,
) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", JSON_CONTENT_TYPE)
        .body(serde_json::to_string(value)?.into())
        .map_err(Box::new)?)
}

/// `{"error": message}` with the given status.
pub fn error_response(status: StatusCode, message: &str) -> Result<Response<Body>, Error> {
    json_response(status, &serde_json::json!({ "error": message }))
}

pub fn not_found() -> Result<Response<Body>, Error> {
    error_response(StatusCode::NOT_FOUND, "Not found")
}
