//! HTTP protocol utilities
//!
//! Response builders shared by the request handler.

pub mod response;

pub use response::{build_404_response, build_json_response};
