//! Procedure-level error types.
//!
//! The store signals absence as `Option`/`bool`; this module is where that
//! outcome becomes a typed error the wire layers can translate. Only the
//! gateway turns these into HTTP status codes.

use thiserror::Error;

/// Result type for procedure calls
pub type RpcResult<T> = Result<T, RpcError>;

/// Errors a procedure call can yield
#[derive(Debug, Error)]
pub enum RpcError {
    /// No record with the requested id
    #[error("Task not found: {task_id}")]
    TaskNotFound { task_id: String },

    /// Malformed request shape (missing required field, unrecognized
    /// status value, unparseable body)
    #[error("Invalid value for '{field}': {reason}")]
    InvalidArgument { field: String, reason: String },

    /// Anything else; details stay server-side
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl RpcError {
    /// Create a task not found error
    pub fn task_not_found(task_id: impl Into<String>) -> Self {
        Self::TaskNotFound {
            task_id: task_id.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

/// Wire-level error body.
///
/// `code` is a stable numeric status matching the HTTP status the gateway
/// responds with; `message` is short and human-readable. Internal detail is
/// never exposed here; the generic message stands in for it and the full
/// error is logged server-side.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Stable error code
    pub code: i32,
    /// Human-readable error message
    pub message: String,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl From<RpcError> for ErrorResponse {
    fn from(err: RpcError) -> Self {
        let (code, message) = match &err {
            RpcError::TaskNotFound { .. } => (404, "Task not found".to_string()),
            RpcError::InvalidArgument { .. } => (400, err.to_string()),
            RpcError::Internal { .. } => (500, "Internal server error".to_string()),
        };

        ErrorResponse::new(code, message)
    }
}
