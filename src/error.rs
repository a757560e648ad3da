//! Error types for Formdesk

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Coarse classification of a failed user action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Rejected locally, no request was sent
    Validation,
    /// Backend answered 404
    NotFound,
    /// Backend answered 409 (duplicate natural key)
    Conflict,
    /// Any other non-2xx status, transport or parse failure
    Generic,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{message}")]
    Validation { field: &'static str, message: String },

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Request(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Validation { .. } => ErrorKind::Validation,
            AppError::NotFound(_) => ErrorKind::NotFound,
            AppError::Conflict(_) => ErrorKind::Conflict,
            AppError::Request(_) | AppError::Config(_) => ErrorKind::Generic,
        }
    }

    /// Text shown to the user. Server-provided messages pass through verbatim.
    pub fn message(&self) -> String {
        match self {
            AppError::Validation { message, .. } => message.clone(),
            AppError::NotFound(msg) | AppError::Conflict(msg) | AppError::Request(msg) => {
                msg.clone()
            }
            AppError::Config(e) => e.to_string(),
        }
    }

    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        AppError::Validation {
            field,
            message: message.into(),
        }
    }

    /// Build the error for a non-2xx response.
    ///
    /// `body` is whatever the backend sent; its `message` field wins over the
    /// fallback text when present.
    pub fn from_status(status: StatusCode, body: &str, fallback: &str) -> Self {
        let message = serde_json::from_str::<ErrorResponse>(body)
            .ok()
            .and_then(|r| r.message)
            .filter(|m| !m.is_empty());

        match status {
            StatusCode::NOT_FOUND => {
                AppError::NotFound(message.unwrap_or_else(|| "Record not found".to_string()))
            }
            StatusCode::CONFLICT => AppError::Conflict(
                message.unwrap_or_else(|| "A record with this key already exists".to_string()),
            ),
            _ => AppError::Request(message.unwrap_or_else(|| fallback.to_string())),
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        tracing::error!("HTTP error: {:?}", e);
        if e.is_decode() {
            AppError::Request("Unexpected response from server".to_string())
        } else {
            AppError::Request("Could not reach the server".to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        tracing::error!("JSON error: {:?}", e);
        AppError::Request("Unexpected response from server".to_string())
    }
}

/// Error body returned by the backend
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub message: Option<String>,
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
