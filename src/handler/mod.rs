//! Request handler module
//!
//! Routes `GET /hello` to the greeting and everything else to an empty 404.

pub mod router;

// Re-export main entry point
pub use router::handle_request;
