//! Client error types

use http::StatusCode;
use serde::Deserialize;
use shared::ErrorCode;
use thiserror::Error;

/// 服务端返回的错误响应格式
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorResponse {
    pub code: u16,
    pub message: String,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Error envelope returned by the server
    #[error("{message} (code {code})")]
    Api {
        code: u16,
        message: String,
        details: Option<serde_json::Value>,
    },

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error (server without an envelope, or rejected locally)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Another call is still pending
    #[error("Another request is in progress")]
    Busy,
}

/// Coarse classification of a [`ClientError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or malformed input
    Validation,
    /// Unknown id
    NotFound,
    /// Network, server or storage failure
    Transport,
    /// Rejected because another call is pending
    Busy,
}

impl ClientError {
    /// Build the error for a non-success response.
    ///
    /// The server's `{code, message, details}` envelope is preferred; other
    /// bodies fall back to a status-based variant.
    pub(crate) fn from_response(status: StatusCode, body: &[u8]) -> Self {
        if let Ok(api_err) = serde_json::from_slice::<ApiErrorResponse>(body) {
            return ClientError::Api {
                code: api_err.code,
                message: api_err.message,
                details: api_err.details,
            };
        }

        let text = String::from_utf8_lossy(body).to_string();
        match status {
            StatusCode::NOT_FOUND => ClientError::NotFound(text),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                ClientError::Validation(text)
            }
            _ => ClientError::Internal(format!("{status}: {text}")),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ClientError::Api { code, .. } => match ErrorCode::try_from(*code) {
                Ok(code) if code.is_validation() => ErrorKind::Validation,
                Ok(code) if code.is_not_found() => ErrorKind::NotFound,
                _ => ErrorKind::Transport,
            },
            ClientError::Validation(_) => ErrorKind::Validation,
            ClientError::NotFound(_) => ErrorKind::NotFound,
            ClientError::Busy => ErrorKind::Busy,
            ClientError::Http(_)
            | ClientError::InvalidResponse(_)
            | ClientError::Internal(_)
            | ClientError::Serialization(_) => ErrorKind::Transport,
        }
    }

    /// Server error code, when the server sent an envelope
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            ClientError::Api { code, .. } => ErrorCode::try_from(*code).ok(),
            _ => None,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
