use http::StatusCode;
use serde_json::json;
use thiserror::Error;
use worker::{Error as WorkerError, Response};

/// Convenience alias for fallible operations inside the service.
pub type AppResult<T> = std::result::Result<T, AppError>;

/// Error taxonomy for the Sheets proxy.
///
/// Every failure is terminal for the current request: handlers convert the
/// variant into a JSON `{"error": ...}` response via [`AppError::to_response`]
/// and nothing is retried.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Worker error: {0}")]
    Worker(#[from] WorkerError),
    #[error("Missing required configuration: {0}")]
    Config(String),
    #[error("Invalid request: {0}")]
    Validation(String),
    #[error("Error generating access token: {0}")]
    Auth(String),
    #[error("Requested entity was not found.")]
    NotFound,
    #[error("Upstream request failed with status {status}: {body}")]
    Upstream { status: u16, body: String },
    #[error("Upstream request failed: {0}")]
    Transport(String),
    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl AppError {
    /// HTTP status the variant surfaces as at the handler boundary.
    ///
    /// Everything is a 500 except upstream not-found (404) and method
    /// mismatch (405). Validation failures also surface as 500; that is
    /// the public contract of these endpoints.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Render the error as the JSON body every route returns on failure.
    pub fn to_response(&self) -> worker::Result<Response> {
        let body = json!({ "error": self.to_string() });
        Ok(Response::from_json(&body)?.with_status(self.status_code().as_u16()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        assert_eq!(AppError::NotFound.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn method_mismatch_maps_to_405() {
        assert_eq!(
            AppError::MethodNotAllowed.status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );
    }

    #[test]
    fn remaining_variants_map_to_500() {
        let errors = [
            AppError::Config("GOOGLE_CLIENT_EMAIL".to_string()),
            AppError::Validation("spreadsheetId".to_string()),
            AppError::Auth("bad key".to_string()),
            AppError::Upstream {
                status: 403,
                body: "forbidden".to_string(),
            },
            AppError::Transport("connection reset".to_string()),
        ];
        for error in errors {
            assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn not_found_body_matches_public_contract() {
        assert_eq!(AppError::NotFound.to_string(), "Requested entity was not found.");
    }
}
