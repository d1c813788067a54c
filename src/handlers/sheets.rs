//! # Sheet Route Adapters
//!
//! Thin per-route adapters over the [`SheetsGateway`]: extract and validate
//! parameters, load credentials, run the single upstream call, and wrap the
//! upstream body in the `{"data": ...}` envelope the clients expect.
//!
//! ## Routes
//!
//! - `GET /v1/sheets/values` - read rows from a range; `range` falls back to
//!   the configured default when omitted.
//! - `POST /v1/sheets/values/append` - append rows to a range.

use std::collections::HashMap;
use worker::*;

use crate::config::Config;
use crate::credentials::Credentials;
use crate::errors::{AppError, AppResult};
use crate::gateway::SheetsGateway;
use crate::log_data;
use crate::logging::RequestLog;
use crate::middleware::ValidationMiddleware;
use crate::models::{Scope, SheetRequest};

/// Append rows to a spreadsheet range.
///
/// Body: `{"spreadsheetId": "...", "range": "...", "values": [[...], ...]}`.
pub async fn append_values(mut req: Request, env: &Env, config: &Config) -> AppResult<Response> {
    let log = RequestLog::new("sheets.append");

    let body: serde_json::Value = req
        .json()
        .await
        .map_err(|_| AppError::Validation("Invalid JSON in request body".to_string()))?;

    let spreadsheet_id = ValidationMiddleware::require_body_field(&body, "spreadsheetId")?;
    let range = ValidationMiddleware::require_body_field(&body, "range")?;
    let values = ValidationMiddleware::require_append_values(&body)?;

    log.info(
        "Appending rows",
        log_data!(
            "spreadsheet_id" => &spreadsheet_id,
            "range" => &range,
            "rows" => values.len()
        ),
    );

    let credentials = Credentials::from_env(env)?;
    let request = SheetRequest::append(spreadsheet_id, range, values);
    let data = SheetsGateway::new(config)
        .execute(&credentials, Scope::ReadWrite, &request)
        .await?;

    log.info("Append request successful", None);
    respond_with_data(data)
}

/// Read rows from a spreadsheet range.
///
/// Query: `spreadsheetId` (required), `range` (optional; defaults to
/// `Config::default_read_range`).
pub async fn read_values(req: Request, env: &Env, config: &Config) -> AppResult<Response> {
    let log = RequestLog::new("sheets.read");

    let url = req.url()?;
    let params: HashMap<String, String> = url
        .query_pairs()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();

    let spreadsheet_id = ValidationMiddleware::require_query_param(&params, "spreadsheetId")?;
    let range = params
        .get("range")
        .filter(|value| !value.is_empty())
        .cloned()
        .unwrap_or_else(|| config.default_read_range.clone());

    log.info(
        "Reading rows",
        log_data!("spreadsheet_id" => &spreadsheet_id, "range" => &range),
    );

    let credentials = Credentials::from_env(env)?;
    let request = SheetRequest::read(spreadsheet_id, range);
    let data = SheetsGateway::new(config)
        .execute(&credentials, Scope::ReadOnly, &request)
        .await?;

    log.info("Read request successful", None);
    respond_with_data(data)
}

fn respond_with_data(data: serde_json::Value) -> AppResult<Response> {
    Response::from_json(&serde_json::json!({ "data": data })).map_err(AppError::from)
}
