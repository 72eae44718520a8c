//! Error Types
//!
//! Local validation failures and remote API failures.

use thiserror::Error;

/// Result type for backend calls
pub type ApiResult<T> = Result<T, ApiError>;

/// Validation failures that block an action before any API call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter company name")]
    MissingCompanyName,
    #[error("Please fill all required fields")]
    MissingChequeFields,
    #[error("At least one item is required")]
    LastLineItem,
}

/// Failures talking to the backend
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server responded {status}")]
    Status {
        status: u16,
        /// Human-readable message from the response body, if any
        message: Option<String>,
    },
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Message supplied by the server, if the failure carried one
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message: Some(msg), .. } => Some(msg.as_str()),
            _ => None,
        }
    }

    /// Server message verbatim, or the per-action fallback
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(ValidationError::MissingCompanyName.to_string(), "Please enter company name");
        assert_eq!(ValidationError::MissingChequeFields.to_string(), "Please fill all required fields");
        assert_eq!(ValidationError::LastLineItem.to_string(), "At least one item is required");
    }

    #[test]
    fn test_user_message_prefers_server_text() {
        let err = ApiError::Status { status: 409, message: Some("Duplicate invoice number".into()) };
        assert_eq!(err.user_message("Error saving invoice"), "Duplicate invoice number");
    }

    #[test]
    fn test_user_message_falls_back() {
        let err = ApiError::Status { status: 500, message: None };
        assert_eq!(err.server_message(), None);
        assert_eq!(err.user_message("Error deleting cheque"), "Error deleting cheque");
    }
}
