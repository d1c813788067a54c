use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::{SCOPE_READ_ONLY, SCOPE_READ_WRITE};
use crate::errors::{AppError, AppResult};

/// OAuth2 scope requested for the access token backing a gateway call.
///
/// Reads only need `spreadsheets.readonly`; appends need the full
/// `spreadsheets` scope.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub enum Scope {
    ReadOnly,
    ReadWrite,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::ReadOnly => SCOPE_READ_ONLY,
            Scope::ReadWrite => SCOPE_READ_WRITE,
        }
    }
}

/// The single upstream operation a request maps to.
#[derive(Clone, Debug, PartialEq)]
pub enum Operation {
    /// `GET values/{range}` returning rows.
    Read,
    /// `POST values/{range}:append` with the rows to insert.
    Append(Vec<Vec<Value>>),
}

/// A validated description of one Sheets API call.
#[derive(Clone, Debug)]
pub struct SheetRequest {
    pub spreadsheet_id: String,
    pub range: String,
    pub operation: Operation,
}

impl SheetRequest {
    pub fn read(spreadsheet_id: String, range: String) -> Self {
        Self {
            spreadsheet_id,
            range,
            operation: Operation::Read,
        }
    }

    pub fn append(spreadsheet_id: String, range: String, values: Vec<Vec<Value>>) -> Self {
        Self {
            spreadsheet_id,
            range,
            operation: Operation::Append(values),
        }
    }

    /// Check request invariants before any network traffic happens.
    ///
    /// Appends must carry at least one row; both identifiers must be
    /// non-empty strings.
    pub fn validate(&self) -> AppResult<()> {
        if self.spreadsheet_id.is_empty() {
            return Err(AppError::Validation(
                "Missing required parameter: spreadsheetId".to_string(),
            ));
        }
        if self.range.is_empty() {
            return Err(AppError::Validation(
                "Missing required parameter: range".to_string(),
            ));
        }
        if let Operation::Append(values) = &self.operation {
            if values.is_empty() {
                return Err(AppError::Validation(
                    "Append requires a non-empty values array".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// Token endpoint response, passed around only long enough to build the
/// Authorization header.
#[derive(Debug, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    #[allow(unused)]
    pub expires_in: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scope_strings_match_google_urls() {
        assert!(Scope::ReadOnly.as_str().ends_with("spreadsheets.readonly"));
        assert!(Scope::ReadWrite.as_str().ends_with("/spreadsheets"));
    }

    #[test]
    fn read_request_with_ids_is_valid() {
        let request = SheetRequest::read("S1".to_string(), "Sheet1!A1:B2".to_string());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn append_with_rows_is_valid() {
        let request = SheetRequest::append(
            "S1".to_string(),
            "Sheet1!A1".to_string(),
            vec![vec![json!("a"), json!("b")]],
        );
        assert!(request.validate().is_ok());
    }

    #[test]
    fn append_with_empty_values_is_rejected() {
        let request = SheetRequest::append("S1".to_string(), "Sheet1!A1".to_string(), vec![]);
        assert!(matches!(
            request.validate(),
            Err(AppError::Validation(message)) if message.contains("values")
        ));
    }

    #[test]
    fn missing_spreadsheet_id_is_rejected() {
        let request = SheetRequest::read(String::new(), "Sheet1!A1:B2".to_string());
        assert!(matches!(
            request.validate(),
            Err(AppError::Validation(message)) if message.contains("spreadsheetId")
        ));
    }

    #[test]
    fn missing_range_is_rejected() {
        let request = SheetRequest::read("S1".to_string(), String::new());
        assert!(matches!(
            request.validate(),
            Err(AppError::Validation(message)) if message.contains("range")
        ));
    }
}
