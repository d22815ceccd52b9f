//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: matches method and path, builds
//! the greeting or a 404, and writes the access log line.

use crate::config::AppState;
use crate::greeting::GreetingRequest;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{header, Method, Request, Response, Uri, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::time::Instant;

pub const GREETING_PATH: &str = "/hello";

/// Outcome of matching a request against the single route
#[derive(Debug, PartialEq, Eq)]
pub enum Dispatch {
    Greeting(GreetingRequest),
    NotFound,
}

/// Match `GET /hello`; the query string is ignored for matching
pub fn dispatch(method: &Method, uri: &Uri) -> Dispatch {
    if method == Method::GET && uri.path() == GREETING_PATH {
        Dispatch::Greeting(GreetingRequest::from_query(uri.query()))
    } else {
        Dispatch::NotFound
    }
}

/// Build the response for a method and URI. Pure: no state is touched.
pub fn respond(method: &Method, uri: &Uri) -> Response<Full<Bytes>> {
    match dispatch(method, uri) {
        Dispatch::Greeting(request) => http::build_json_response(&request.respond()),
        Dispatch::NotFound => http::build_404_response(),
    }
}

/// Main entry point for HTTP request handling
pub fn handle_request<B>(
    req: &Request<B>,
    state: &AppState,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let response = respond(req.method(), req.uri());

    if state.config.logging.access_log {
        let entry = access_entry(req, &response, peer_addr, started);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

fn access_entry<B>(
    req: &Request<B>,
    response: &Response<Full<Bytes>>,
    peer_addr: SocketAddr,
    started: Instant,
) -> AccessLogEntry {
    let header_value = |name: header::HeaderName| {
        req.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string)
    };

    let mut entry = AccessLogEntry::new(
        peer_addr.ip().to_string(),
        req.method().to_string(),
        req.uri().path().to_string(),
    );
    entry.query = req.uri().query().map(ToString::to_string);
    entry.http_version = version_label(req.version()).to_string();
    entry.status = response.status().as_u16();
    entry.body_bytes = response.body().size_hint().exact().unwrap_or(0);
    entry.referer = header_value(header::REFERER);
    entry.user_agent = header_value(header::USER_AGENT);
    entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
    entry
}

fn version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "0.9",
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        Version::HTTP_3 => "3",
        _ => "1.1",
    }
}
