//! Error types for the todolist API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers distinguish "the todo
//! does not exist" from "the server failed". Every other non-2xx response
//! lands in `HttpError` with the raw status and body, plus the server's
//! structured error payload when it sent one.

use std::fmt;

use crate::types::ErrorResponse;

/// Errors produced while fetching todos.
#[derive(Debug)]
pub enum ApiError {
    /// The round trip itself failed (connection refused, DNS, reset...).
    Transport(String),

    /// The server returned 404.
    NotFound,

    /// The server returned a non-2xx status other than 404.
    HttpError {
        status: u16,
        body: String,
        details: Option<ErrorResponse>,
    },

    /// The response body did not match the expected shape.
    DeserializationError(String),
}

impl ApiError {
    /// HTTP status carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::NotFound => Some(404),
            ApiError::HttpError { status, .. } => Some(*status),
            ApiError::Transport(_) | ApiError::DeserializationError(_) => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "transport failed: {msg}"),
            ApiError::NotFound => write!(f, "resource not found"),
            ApiError::HttpError {
                status,
                details: Some(details),
                ..
            } if !details.messages.is_empty() => {
                write!(f, "HTTP {status}: {}", details.messages.join("; "))
            }
            ApiError::HttpError { status, body, .. } => {
                write!(f, "HTTP {status}: {body}")
            }
            ApiError::DeserializationError(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefers_server_messages() {
        let err = ApiError::HttpError {
            status: 400,
            body: "{...}".to_string(),
            details: Some(ErrorResponse {
                messages: vec!["Name must not be null or empty".to_string()],
                ..ErrorResponse::default()
            }),
        };
        assert_eq!(err.to_string(), "HTTP 400: Name must not be null or empty");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn display_falls_back_to_raw_body() {
        let err = ApiError::HttpError {
            status: 500,
            body: "internal error".to_string(),
            details: None,
        };
        assert_eq!(err.to_string(), "HTTP 500: internal error");
        assert_eq!(ApiError::Transport("refused".into()).status(), None);
    }
}
