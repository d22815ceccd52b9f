//! HTTP response building module
//!
//! Provides builders for the responses the service emits, decoupled from the
//! greeting logic.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{header, Response, StatusCode};
use serde::Serialize;

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Build 200 response with a JSON body
///
/// Serialization failure yields a 500 with a fixed JSON error body.
pub fn build_json_response<T: Serialize>(body: &T) -> Response<Full<Bytes>> {
    let json = match serde_json::to_vec(body) {
        Ok(j) => j,
        Err(e) => {
            crate::logger::log_error(&format!("Failed to serialize response: {e}"));
            return build_500_response();
        }
    };

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, JSON_CONTENT_TYPE)
        .body(Full::new(Bytes::from(json)))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            build_500_response()
        })
}

/// Build 404 Not Found response with an empty body
pub fn build_404_response() -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(Bytes::new()));
    *response.status_mut() = StatusCode::NOT_FOUND;
    response
}

fn build_500_response() -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(Bytes::from_static(
        br#"{"error":"Internal server error"}"#,
    )));
    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static(JSON_CONTENT_TYPE),
    );
    response
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
