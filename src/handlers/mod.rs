//! # Handlers Module
//!
//! HTTP request handlers for the Sheets proxy. Route adapters live in
//! [`sheets`]; this module owns dispatch within the `/v1/sheets` group and
//! the uniform result handling: every outcome, success or error, leaves
//! with CORS headers applied and errors rendered as the standard JSON body.

use std::sync::Arc;
use worker::*;

use crate::config::Config;
use crate::errors::AppError;
use crate::middleware::CorsMiddleware;

pub mod sheets;

/// Dispatches spreadsheet value operations.
///
/// A known path with the wrong method is answered 405 before credentials
/// are loaded or anything upstream is contacted.
pub async fn handle_sheet_routes(req: Request, env: Env, config: Arc<Config>) -> Result<Response> {
    let method = req.method();
    let path = req.url()?.path().to_string();

    let result = match (method, path.as_str()) {
        (Method::Get, "/v1/sheets/values") => sheets::read_values(req, &env, &config).await,
        (Method::Post, "/v1/sheets/values/append") => {
            sheets::append_values(req, &env, &config).await
        }
        (_, "/v1/sheets/values") | (_, "/v1/sheets/values/append") => {
            Err(AppError::MethodNotAllowed)
        }
        _ => {
            return Response::error("Not Found", 404).map(CorsMiddleware::apply_headers);
        }
    };

    match result {
        Ok(response) => Ok(CorsMiddleware::apply_headers(response)),
        Err(error) => {
            console_error!("Error processing request: {}", error);
            match error.to_response() {
                Ok(response) => Ok(CorsMiddleware::apply_headers(response)),
                Err(_) => Response::error("Internal Server Error", 500)
                    .map(CorsMiddleware::apply_headers),
            }
        }
    }
}

/// Provides a health check endpoint for monitoring and load balancer probes.
pub async fn handle_health_check(_req: Request, _env: Env) -> Result<Response> {
    Response::from_json(&serde_json::json!({
        "status": "healthy",
        "service": "sheets-proxy-cf-workers",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Handles requests to unmatched routes with a 404 Not Found response.
pub async fn handle_not_found(_req: Request, _env: Env) -> Result<Response> {
    Response::error("Not Found", 404)
}
