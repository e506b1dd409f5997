//! # API Error Type
//!
//! Failures at the network boundary.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow at the Boundary                       │
//! │                                                                     │
//! │  reqwest failure (DNS, timeout, TLS) ──► ApiError::Transport        │
//! │                                                                     │
//! │  HTTP 404 ──────────────────────────────► ApiError::NotFound        │
//! │                                                                     │
//! │  Other non-2xx ──┬─ body parses as ─────► ApiError::Server with     │
//! │                  │  { message: ... }       the server's message     │
//! │                  └─ otherwise ──────────► ApiError::Server with     │
//! │                                            the raw body text        │
//! │                                                                     │
//! │  2xx with unexpected shape ─────────────► ApiError::InvalidResponse │
//! │                                                                     │
//! │  The sale screen shows user_message(): the server's words when it   │
//! │  said any, a generic fallback otherwise. The draft is untouched.    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Convenience type alias for Results with ApiError.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors crossing back from the REST boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed (connection, timeout, TLS, ...).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered 404 for the requested resource.
    #[error("not found: {message}")]
    NotFound { message: String },

    /// The server rejected the request with a non-2xx status.
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// A 2xx response did not match the expected wire schema.
    #[error("malformed response: {0}")]
    InvalidResponse(String),

    /// The client configuration could not be applied.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ApiError {
    /// The message to surface in the UI for a failed submission: the
    /// server-provided message when one exists, else a generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Server { message, .. } | ApiError::NotFound { message }
                if !message.trim().is_empty() =>
            {
                message.clone()
            }
            _ => "Failed to create sale".to_string(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_server_words() {
        let err = ApiError::Server {
            status: 400,
            message: "Insufficient stock for Coca-Cola".to_string(),
        };
        assert_eq!(err.user_message(), "Insufficient stock for Coca-Cola");
    }

    #[test]
    fn test_user_message_generic_fallback() {
        let err = ApiError::Server {
            status: 500,
            message: String::new(),
        };
        assert_eq!(err.user_message(), "Failed to create sale");

        let err = ApiError::InvalidResponse("missing field `sale`".to_string());
        assert_eq!(err.user_message(), "Failed to create sale");
    }
}
