//! Greeting domain
//!
//! A greeting is a pure function of two optional names taken from the query
//! string. Nothing is shared between requests.

mod format;
mod query;

use format::compose_message;
use query::parse_names;

use serde::Serialize;

/// Names extracted from one request
///
/// An empty value and a missing key both end up as `None`; callers cannot
/// tell "not provided" apart from "provided empty".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GreetingRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// JSON body of a successful greeting
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GreetingResponse {
    pub message: String,
}

impl GreetingRequest {
    /// Build from the raw query string (without the leading `?`)
    pub fn from_query(query: Option<&str>) -> Self {
        query.map(parse_names).unwrap_or_default()
    }

    pub fn respond(&self) -> GreetingResponse {
        GreetingResponse {
            message: compose_message(self.first_name.as_deref(), self.last_name.as_deref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_query_greets_world() {
        let request = GreetingRequest::from_query(None);
        assert_eq!(request, GreetingRequest::default());
        assert_eq!(request.respond().message, "Vanakam World");
    }

    #[test]
    fn test_full_name_from_query() {
        let request = GreetingRequest::from_query(Some("First+name=Bob&Last+name=Builder"));
        assert_eq!(request.respond().message, "Vanakam Builder, Bob");
    }

    #[test]
    fn test_response_serializes_as_message_object() {
        let body = serde_json::to_string(&GreetingResponse {
            message: "Vanakam World".to_string(),
        })
        .unwrap();
        assert_eq!(body, r#"{"message":"Vanakam World"}"#);
    }
}
