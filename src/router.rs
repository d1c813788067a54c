//! # Request Routing and Dispatch
//!
//! Pattern-based routing for the Sheets proxy. The router:
//! - answers CORS preflight requests before any other processing
//! - routes `/v1/sheets` operations to the sheet handlers
//! - provides a health check endpoint for monitoring
//! - returns 404 responses for unmatched routes
//!
//! Method validation for the sheet routes happens inside the route group,
//! so a known path with an unsupported method yields 405 rather than 404.

use std::sync::Arc;
use worker::*;

use crate::config::Config;
use crate::handlers::*;
use crate::middleware::CorsMiddleware;

/// Handles incoming HTTP requests and routes them to appropriate handlers.
pub async fn handle_request(req: Request, env: Env, config: Arc<Config>) -> Result<Response> {
    // Handle CORS preflight requests early to avoid unnecessary processing
    if req.method() == Method::Options {
        return CorsMiddleware::handle_preflight();
    }

    let url = req.url()?;
    let path = url.path();
    let method = req.method();

    console_log!("Routing request: {} {}", method, path);

    match (method, path) {
        // Health check endpoint for monitoring and load balancer probes
        (Method::Get, "/health") => handle_health_check(req, env).await,

        // Spreadsheet value operations
        (_, path) if path.starts_with("/v1/sheets") => {
            handle_sheet_routes(req, env, config).await
        }

        // Default 404 handler for unmatched routes
        _ => handle_not_found(req, env).await,
    }
}
