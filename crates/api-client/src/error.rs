//! Error types for backend requests

use serde_json::Value;
use thiserror::Error;

/// Status reported for timed out or cancelled requests
pub const TIMEOUT_STATUS: u16 = 408;

/// Errors that can occur when talking to the recommendation backend
#[derive(Error, Debug)]
pub enum ApiError {
    /// Backend answered with a non-2xx status
    #[error("{message}")]
    Http {
        status: u16,
        message: String,
        payload: Value,
    },

    /// Timeout elapsed or the caller cancelled the request
    #[error("request timed out")]
    Timeout,

    #[error("network error: {0}")]
    Network(String),

    #[error("invalid backend configuration: {0}")]
    Config(String),
}

impl ApiError {
    /// HTTP-like status of the failure, if it has one
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            ApiError::Timeout => Some(TIMEOUT_STATUS),
            _ => None,
        }
    }

    /// Response body of an HTTP failure
    pub fn payload(&self) -> Option<&Value> {
        match self {
            ApiError::Http { payload, .. } => Some(payload),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_codes() {
        let http = ApiError::Http {
            status: 503,
            message: "Backend caido".to_string(),
            payload: json!({"message": "Backend caido"}),
        };

        assert_eq!(http.status(), Some(503));
        assert_eq!(http.to_string(), "Backend caido");
        assert_eq!(ApiError::Timeout.status(), Some(408));
        assert_eq!(ApiError::Network("down".into()).status(), None);
    }

    #[test]
    fn test_payload_only_for_http() {
        assert!(ApiError::Timeout.payload().is_none());
        assert!(ApiError::Config("empty".into()).payload().is_none());
    }
}
