use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Categorization of application errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AppErrorKind {
    NotFound,
    BadRequest,
    ValidationError,
    Conflict,
    Unauthorized,
    Forbidden,
    RateLimited,
    InternalError,
    /// The request never produced an HTTP response.
    Network,
    /// The response body did not match the expected shape.
    Decode,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::NotFound => write!(f, "NotFound"),
            AppErrorKind::BadRequest => write!(f, "BadRequest"),
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
            AppErrorKind::Conflict => write!(f, "Conflict"),
            AppErrorKind::Unauthorized => write!(f, "Unauthorized"),
            AppErrorKind::Forbidden => write!(f, "Forbidden"),
            AppErrorKind::RateLimited => write!(f, "RateLimited"),
            AppErrorKind::InternalError => write!(f, "InternalError"),
            AppErrorKind::Network => write!(f, "Network"),
            AppErrorKind::Decode => write!(f, "Decode"),
        }
    }
}

impl AppErrorKind {
    /// Map an HTTP status code to an error kind.
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => AppErrorKind::BadRequest,
            401 => AppErrorKind::Unauthorized,
            403 => AppErrorKind::Forbidden,
            404 => AppErrorKind::NotFound,
            409 => AppErrorKind::Conflict,
            422 => AppErrorKind::ValidationError,
            429 => AppErrorKind::RateLimited,
            _ => AppErrorKind::InternalError,
        }
    }
}

/// Structured application error shared by the client library and the UI.
///
/// For errors built from an HTTP response, `message` holds the text the
/// server supplied (empty when it supplied none). For transport and decode
/// failures it holds a diagnostic meant for logs, never for the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

/// Error body shape used by the case API: `{"error": "..."}`.
#[derive(Deserialize)]
struct ServerErrorBody {
    error: String,
}

impl AppError {
    fn new(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::NotFound, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::BadRequest, message)
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            field_errors,
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Unauthorized, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Forbidden, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::InternalError, message)
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Network, message)
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Decode, message)
    }

    /// Build an error from a non-success HTTP response.
    ///
    /// Accepts `{"error": "..."}` bodies and full `AppError` JSON. Any other
    /// body leaves `message` empty so callers fall back to their own text.
    pub fn from_status(status: u16, body: &str) -> Self {
        let kind = AppErrorKind::from_status(status);
        if let Ok(parsed) = serde_json::from_str::<ServerErrorBody>(body) {
            return Self::new(kind, parsed.error);
        }
        if let Ok(parsed) = serde_json::from_str::<AppError>(body) {
            return Self {
                kind,
                message: parsed.message,
                field_errors: parsed.field_errors,
            };
        }
        Self::new(kind, String::new())
    }

    /// Text to show next to the control that triggered the failed operation.
    ///
    /// Returns the server-supplied message when there is one, otherwise
    /// `fallback`. Transport and decode errors always use `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self.kind {
            AppErrorKind::Network | AppErrorKind::Decode => fallback.to_string(),
            _ if self.message.trim().is_empty() => fallback.to_string(),
            _ => self.message.clone(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}
