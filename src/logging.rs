use chrono::Utc;
use serde_json::json;
use worker::*;

use crate::utils::generate_request_id;

/// Structured logger scoped to a single proxied request.
///
/// Emits one JSON object per line so log queries can filter on
/// `request_id` and `route`.
pub struct RequestLog {
    request_id: String,
    route: &'static str,
}

impl RequestLog {
    /// Create a logger for the named route with a fresh request id.
    pub fn new(route: &'static str) -> Self {
        Self {
            request_id: generate_request_id(),
            route,
        }
    }

    pub fn info(&self, message: &str, data: Option<serde_json::Value>) {
        self.emit("INFO", message, data);
    }

    pub fn error(&self, message: &str, data: Option<serde_json::Value>) {
        self.emit("ERROR", message, data);
    }

    fn emit(&self, level: &str, message: &str, data: Option<serde_json::Value>) {
        let line = json!({
            "timestamp": Utc::now().to_rfc3339(),
            "level": level,
            "request_id": self.request_id,
            "route": self.route,
            "message": message,
            "data": data
        });

        match level {
            "ERROR" => console_error!("{}", line),
            _ => console_log!("{}", line),
        }
    }
}

/// Macro to create a JSON object for additional log data
///
/// Usage: log_data!("spreadsheet_id" => id, "range" => range)
#[macro_export]
macro_rules! log_data {
    ($($key:expr => $value:expr),*) => {
        Some(serde_json::json!({ $($key: $value),* }))
    };
}
