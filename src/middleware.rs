//! # Middleware Components
//!
//! Cross-cutting request/response processing for the Sheets proxy: CORS
//! support for the browser clients that call the proxy, and parameter
//! validation shared by the route adapters.
//!
//! Both middlewares are stateless; validation integrates with the error
//! taxonomy so a failed check becomes the standard JSON error response.

use serde_json::Value;
use worker::*;

use crate::errors::{AppError, AppResult};
use crate::utils::cors_headers;

/// Middleware for handling Cross-Origin Resource Sharing (CORS) requests.
///
/// The proxy is called from web pages on other origins, so every response
/// (success or error) carries CORS headers and OPTIONS preflights are
/// answered before routing.
pub struct CorsMiddleware;

impl CorsMiddleware {
    /// Applies CORS headers to an existing response.
    pub fn apply_headers(response: Response) -> Response {
        response.with_headers(cors_headers())
    }

    /// Handles CORS preflight requests (OPTIONS method).
    pub fn handle_preflight() -> Result<Response> {
        Ok(Response::empty()?.with_headers(cors_headers()))
    }
}

/// Middleware for validating request parameters.
///
/// Validation happens before credentials are loaded or any network call is
/// made; a missing parameter terminates the request immediately.
pub struct ValidationMiddleware;

impl ValidationMiddleware {
    /// Extract a required, non-empty string field from a JSON body.
    pub fn require_body_field(body: &Value, field: &str) -> AppResult<String> {
        body.get(field)
            .and_then(|value| value.as_str())
            .filter(|value| !value.is_empty())
            .map(str::to_string)
            .ok_or_else(|| {
                AppError::Validation(format!("Missing required body parameter: {field}"))
            })
    }

    /// Extract the `values` rows from an append body.
    ///
    /// The outer array must exist and be non-empty, and every row must
    /// itself be an array, matching what the upstream append endpoint
    /// accepts.
    pub fn require_append_values(body: &Value) -> AppResult<Vec<Vec<Value>>> {
        let rows = body
            .get("values")
            .and_then(|value| value.as_array())
            .ok_or_else(|| {
                AppError::Validation("Missing required body parameter: values".to_string())
            })?;

        if rows.is_empty() {
            return Err(AppError::Validation(
                "Append requires a non-empty values array".to_string(),
            ));
        }

        rows.iter()
            .map(|row| {
                row.as_array().cloned().ok_or_else(|| {
                    AppError::Validation("values must be an array of row arrays".to_string())
                })
            })
            .collect()
    }

    /// Extract a required, non-empty query parameter.
    pub fn require_query_param(
        params: &std::collections::HashMap<String, String>,
        name: &str,
    ) -> AppResult<String> {
        params
            .get(name)
            .filter(|value| !value.is_empty())
            .cloned()
            .ok_or_else(|| {
                AppError::Validation(format!("Missing required query parameter: {name}"))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn require_body_field_returns_present_value() {
        let body = json!({ "spreadsheetId": "S1" });
        assert_eq!(
            ValidationMiddleware::require_body_field(&body, "spreadsheetId").unwrap(),
            "S1"
        );
    }

    #[test]
    fn require_body_field_rejects_missing_and_empty() {
        let body = json!({ "range": "" });
        assert!(matches!(
            ValidationMiddleware::require_body_field(&body, "spreadsheetId"),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            ValidationMiddleware::require_body_field(&body, "range"),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn require_append_values_accepts_row_arrays() {
        let body = json!({ "values": [["a", "b"], [1, 2]] });
        let rows = ValidationMiddleware::require_append_values(&body).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec![json!("a"), json!("b")]);
    }

    #[test]
    fn require_append_values_rejects_absent_values() {
        let body = json!({ "spreadsheetId": "S1" });
        assert!(matches!(
            ValidationMiddleware::require_append_values(&body),
            Err(AppError::Validation(message)) if message.contains("values")
        ));
    }

    #[test]
    fn require_append_values_rejects_empty_array() {
        let body = json!({ "values": [] });
        assert!(matches!(
            ValidationMiddleware::require_append_values(&body),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn require_append_values_rejects_non_array_rows() {
        let body = json!({ "values": ["not-a-row"] });
        assert!(matches!(
            ValidationMiddleware::require_append_values(&body),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn require_query_param_rejects_empty_value() {
        let mut params = HashMap::new();
        params.insert("spreadsheetId".to_string(), String::new());
        assert!(matches!(
            ValidationMiddleware::require_query_param(&params, "spreadsheetId"),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn require_query_param_returns_value() {
        let mut params = HashMap::new();
        params.insert("range".to_string(), "Sheet1!A1:B2".to_string());
        assert_eq!(
            ValidationMiddleware::require_query_param(&params, "range").unwrap(),
            "Sheet1!A1:B2"
        );
    }
}
