//! # Utility Functions
//!
//! Shared helpers for the Sheets proxy: CORS header construction and
//! request-id generation for log correlation.

use crate::constants::{CORS_ALLOW_HEADERS, CORS_ALLOW_METHODS, CORS_ALLOW_ORIGIN};
use uuid::Uuid;
use worker::Headers;

/// Creates HTTP headers for Cross-Origin Resource Sharing (CORS) support.
///
/// Applied to every response the service produces, including error
/// responses and preflight answers. The configuration allows all origins;
/// restrict `Access-Control-Allow-Origin` when the client origin set is
/// known.
pub fn cors_headers() -> Headers {
    let headers = Headers::new();
    // Note: These values are known to be valid
    let _ = headers.set("Access-Control-Allow-Origin", CORS_ALLOW_ORIGIN);
    let _ = headers.set("Access-Control-Allow-Methods", CORS_ALLOW_METHODS);
    let _ = headers.set("Access-Control-Allow-Headers", CORS_ALLOW_HEADERS);
    headers
}

/// Generates a unique identifier used to correlate log lines for one request.
pub fn generate_request_id() -> String {
    Uuid::new_v4().to_string()
}
