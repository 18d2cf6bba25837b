//! Normalized gateway errors.
//!
//! Every failure a screen can see is one of these variants. Backend messages
//! are kept verbatim so they can be shown to the user as-is.

use common::validation::ValidationError;


#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// Input rejected before any request was sent.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// 401 on a login attempt.
    #[error("Login rejected: {}", .message.as_deref().unwrap_or("-"))]
    InvalidCredentials { message: Option<String> },

    /// 401 on any other request: the session is missing or expired.
    #[error("Unauthorized: {}", .message.as_deref().unwrap_or("-"))]
    Unauthorized { message: Option<String> },

    #[error("Forbidden: {}", .message.as_deref().unwrap_or("-"))]
    Forbidden { message: Option<String> },

    #[error("Not found: {}", .message.as_deref().unwrap_or("-"))]
    NotFound { message: Option<String> },

    /// The request succeeded at the HTTP level but the backend answered
    /// `success: false`.
    #[error("Rejected by backend: {message}")]
    Rejected { message: String },

    #[error("Backend error {status}: {}", .message.as_deref().unwrap_or("-"))]
    Backend { status: u16, message: Option<String> },

    #[error("Network error: {0}")]
    Network(String),

    /// The response did not match the endpoint's schema.
    #[error("Unexpected response from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },
}

impl ApiError {
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    /// The backend-provided message, if the backend sent one.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ApiError::InvalidCredentials { message }
            | ApiError::Unauthorized { message }
            | ApiError::Forbidden { message }
            | ApiError::NotFound { message }
            | ApiError::Backend { message, .. } => message.as_deref(),
            ApiError::Rejected { message } => Some(message.as_str()),
            _ => None,
        }
    }

    /// Text for the toast: the backend message when present, otherwise
    /// `fallback` (validation errors always use their own text).
    pub fn user_message_or(&self, fallback: &str) -> String {
        if let ApiError::Validation(e) = self {
            return e.to_string();
        }
        match self.backend_message() {
            Some(message) if !message.trim().is_empty() => message.to_string(),
            _ => fallback.to_string(),
        }
    }

    pub fn user_message(&self) -> String {
        let fallback = match self {
            ApiError::InvalidCredentials { .. } => "Login failed.",
            ApiError::Unauthorized { .. } => "Your session has expired. Please log in again.",
            ApiError::Forbidden { .. } => "You do not have access to this.",
            ApiError::NotFound { .. } => "The requested item was not found.",
            ApiError::Network(_) => "Could not reach the server.",
            ApiError::Decode { .. } => "The server sent an unexpected response.",
            _ => "Something went wrong. Please try again.",
        };
        self.user_message_or(fallback)
    }
}
