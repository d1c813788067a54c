//! # Sheets Proxy - Cloudflare Workers
//!
//! A small proxy service built with Rust and Cloudflare Workers that reads
//! from and appends to Google Sheets spreadsheets on behalf of web clients,
//! authenticating upstream with service-account credentials held in Worker
//! secrets.
//!
//! ## Architecture
//!
//! The service follows a modular architecture with clear separation of concerns:
//! - **Router**: Routes incoming requests to appropriate handlers
//! - **Middleware**: Handles CORS and request validation
//! - **Handlers**: Thin per-route adapters over the gateway
//! - **Credentials**: Loads and normalizes the service-account key pair
//! - **Gateway**: Obtains a scoped bearer token and issues the single
//!   upstream Sheets API call
//! - **Models**: Define request descriptions, scopes, and token types
//!
//! ## Core Behavior
//!
//! Each invocation validates the HTTP method, validates request parameters,
//! builds credentials from environment state, and forwards exactly one call
//! to the Sheets REST API v4. No retries, no caching, no shared state
//! between invocations beyond the read-only configuration.
//!
//! ## Example Usage
//!
//! The service exposes a REST API for spreadsheet value operations:
//!
//! ```text
//! GET  /v1/sheets/values?spreadsheetId=...&range=Sheet1!A1:B2
//! POST /v1/sheets/values/append   {"spreadsheetId": "...", "range": "...", "values": [["a","b"]]}
//! GET  /health
//! ```

use std::sync::{Arc, OnceLock};
use worker::*;

mod config;
mod constants;
mod credentials;
mod errors;
mod gateway;
mod handlers;
mod logging;
mod middleware;
mod models;
mod router;
mod utils;

use config::Config;
use constants::SHEETS_CONFIG_KV_NAME;

static CONFIG_CACHE: OnceLock<Arc<Config>> = OnceLock::new();

/// Main entry point for the Cloudflare Worker.
///
/// Sets up panic handling, loads configuration from KV storage with
/// fallback to defaults, and delegates request routing to the router
/// module. All errors are converted to structured JSON responses with
/// appropriate status codes at the handler boundary.
#[event(fetch)]
pub async fn main(req: Request, env: Env, _ctx: Context) -> Result<Response> {
    // Set up panic hook for better error reporting in development
    console_error_panic_hook::set_once();

    console_log!("Request: {} {}", req.method(), req.url()?.path());

    let config = load_config(&env).await?;

    // Route the request to appropriate handlers
    router::handle_request(req, env, config).await
}

async fn load_config(env: &Env) -> Result<Arc<Config>> {
    if let Some(config) = CONFIG_CACHE.get() {
        return Ok(config.clone());
    }

    // A deployment without the KV binding still serves with defaults.
    let config = match env.kv(SHEETS_CONFIG_KV_NAME) {
        Ok(kv) => Arc::new(Config::load(&kv).await?),
        Err(_) => Arc::new(Config::default()),
    };
    let _ = CONFIG_CACHE.set(config.clone());
    Ok(config)
}
