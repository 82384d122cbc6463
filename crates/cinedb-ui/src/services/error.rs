//! # Design
//!
//! - One error type for every call against the movie collection.
//! - Display strings are what the UI shows, so they carry the HTTP status.
//! - The failing operation travels with the error for console logging.

use thiserror::Error;

/// Result alias for collection calls.
pub type ApiResult<T> = Result<T, ApiError>;

/// Operation that produced an [`ApiError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApiOperation {
    /// `GET {collection}`.
    List,
    /// `POST {collection}`.
    Create,
    /// `PUT {collection}/{id}`.
    Update,
    /// `DELETE {collection}/{id}`.
    Delete,
}

impl ApiOperation {
    /// Short label used in console diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::List => "fetching movies",
            Self::Create => "creating movie",
            Self::Update => "updating movie",
            Self::Delete => "deleting movie",
        }
    }
}

/// Failures surfaced by the collection client.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The backend answered with a non-2xx status.
    #[error("{}", describe_status(*.operation, *.status, .status_text))]
    Status {
        /// Operation that was attempted.
        operation: ApiOperation,
        /// HTTP status code.
        status: u16,
        /// HTTP reason phrase, possibly empty.
        status_text: String,
    },
    /// The request never completed (network down, CORS, DNS).
    #[error("{message}")]
    Transport {
        /// Operation that was attempted.
        operation: ApiOperation,
        /// Message reported by the fetch layer.
        message: String,
    },
    /// The request body could not be serialised.
    #[error("{message}")]
    Encode {
        /// Operation that was attempted.
        operation: ApiOperation,
        /// Serialiser message.
        message: String,
    },
    /// The response body was not the expected JSON.
    #[error("{message}")]
    Decode {
        /// Operation that was attempted.
        operation: ApiOperation,
        /// Deserialiser message.
        message: String,
    },
}

impl ApiError {
    /// Operation that failed.
    #[must_use]
    pub const fn operation(&self) -> ApiOperation {
        match self {
            Self::Status { operation, .. }
            | Self::Transport { operation, .. }
            | Self::Encode { operation, .. }
            | Self::Decode { operation, .. } => *operation,
        }
    }

    /// HTTP status when the backend answered.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn describe_status(operation: ApiOperation, status: u16, status_text: &str) -> String {
    match operation {
        ApiOperation::List => format!("Error: {status} - {status_text}"),
        ApiOperation::Create => format!("Error al crear película: {status}"),
        ApiOperation::Update => format!("Error al actualizar película: {status}"),
        ApiOperation::Delete => format!("Error al eliminar película: {status}"),
    }
}

#[cfg(test)]
mod tests {
    use super::{ApiError, ApiOperation};

    #[test]
    fn list_status_includes_reason_phrase() {
        let err = ApiError::Status {
            operation: ApiOperation::List,
            status: 500,
            status_text: "Internal Server Error".to_string(),
        };
        assert_eq!(err.to_string(), "Error: 500 - Internal Server Error");
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn mutation_status_messages_carry_code() {
        let create = ApiError::Status {
            operation: ApiOperation::Create,
            status: 400,
            status_text: String::new(),
        };
        let update = ApiError::Status {
            operation: ApiOperation::Update,
            status: 404,
            status_text: "Not Found".to_string(),
        };
        let delete = ApiError::Status {
            operation: ApiOperation::Delete,
            status: 409,
            status_text: String::new(),
        };
        assert_eq!(create.to_string(), "Error al crear película: 400");
        assert_eq!(update.to_string(), "Error al actualizar película: 404");
        assert_eq!(delete.to_string(), "Error al eliminar película: 409");
    }

    #[test]
    fn transport_errors_keep_fetch_message() {
        let err = ApiError::Transport {
            operation: ApiOperation::Delete,
            message: "Failed to fetch".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to fetch");
        assert_eq!(err.operation(), ApiOperation::Delete);
        assert_eq!(err.status(), None);
    }
}
