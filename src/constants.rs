//! # Application Constants
//!
//! This module defines application-wide constants used throughout the Sheets
//! proxy service. Centralizing constants improves maintainability and reduces
//! the risk of inconsistencies across the codebase.
//!
//! ## Binding Names
//!
//! Constants for Cloudflare Worker bindings that must match wrangler.toml
//! configuration.
//!
//! ## Google API Endpoints
//!
//! Fixed upstream endpoints for the Sheets REST API v4 and the OAuth2 token
//! service.

/// Standard KV configuration binding name
pub const SHEETS_CONFIG_KV_NAME: &str = "SHEETS_CONFIG";

/// Secret/var name carrying the service account email
pub const ENV_CLIENT_EMAIL: &str = "GOOGLE_CLIENT_EMAIL";

/// Secret/var name carrying the service account private key (PEM)
pub const ENV_PRIVATE_KEY: &str = "GOOGLE_PRIVATE_KEY";

/// Base URL for spreadsheet value operations
pub const SHEETS_API_BASE_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// OAuth2 token endpoint for the service-account JWT-bearer exchange
pub const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

/// OAuth2 scope for read-only spreadsheet access
pub const SCOPE_READ_ONLY: &str = "https://www.googleapis.com/auth/spreadsheets.readonly";

/// OAuth2 scope for read-write spreadsheet access
pub const SCOPE_READ_WRITE: &str = "https://www.googleapis.com/auth/spreadsheets";

/// Fallback A1 range for reads that omit the `range` query parameter
pub const DEFAULT_READ_RANGE: &str = "CSdata!A1:H";

/// Lifetime requested for access tokens, in seconds
pub const TOKEN_TTL_SECS: i64 = 3600;

/// CORS header for allowed origins
pub const CORS_ALLOW_ORIGIN: &str = "*";

/// CORS header for allowed methods
pub const CORS_ALLOW_METHODS: &str = "GET, POST, OPTIONS";

/// CORS header for allowed headers
pub const CORS_ALLOW_HEADERS: &str = "Content-Type";
