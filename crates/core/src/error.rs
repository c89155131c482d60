//! Error types for the Mockshelf catalog
//!
//! Every failure raised below the HTTP boundary is an [`AppError`]. Errors are grouped
//! into four kinds:
//! - **Validation**: the caller sent something malformed (bad path or query parameter)
//! - **NotFound**: a lookup matched no record
//! - **Storage**: the catalog store failed (connection, migration, constraint, query)
//! - **Internal**: anything else that should never happen
//!
//! The kind carries the HTTP status the failure maps to. Deciding what the client
//! actually sees is left to the error classifier in `mockshelf-catalog`.

use std::fmt;
use thiserror::Error;

/// Broad classification of an [`AppError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed input from the caller
    Validation,
    /// Lookup found no matching record
    NotFound,
    /// Catalog store failure
    Storage,
    /// Unexpected internal failure
    Internal,
}

impl ErrorKind {
    /// Returns the HTTP status code associated with this kind
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation => 400,
            Self::NotFound => 404,
            Self::Storage | Self::Internal => 500,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation => write!(f, "validation"),
            Self::NotFound => write!(f, "not found"),
            Self::Storage => write!(f, "storage"),
            Self::Internal => write!(f, "internal"),
        }
    }
}

/// Main error type for Mockshelf
#[derive(Error, Debug)]
pub enum AppError {
    /// Caller supplied an invalid parameter
    #[error("{message}")]
    Validation { param: String, message: String },

    /// Record not found in the catalog store
    #[error("record not found: {entity} with id {identifier}")]
    RecordNotFound { entity: String, identifier: String },

    /// Catalog store operation failed
    #[error("database error: {message}")]
    DatabaseError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Generic internal error
    #[error("internal error: {message}")]
    InternalError { message: String },
}

impl AppError {
    /// Returns the kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation { .. } => ErrorKind::Validation,
            Self::RecordNotFound { .. } => ErrorKind::NotFound,
            Self::DatabaseError { .. } => ErrorKind::Storage,
            Self::InternalError { .. } => ErrorKind::Internal,
        }
    }

    /// Returns the HTTP status code of this error's kind
    pub fn status_code(&self) -> u16 {
        self.kind().status_code()
    }

    /// Parameter was expected to be an integer
    pub fn not_an_integer(param: impl Into<String>) -> Self {
        let param = param.into();
        Self::Validation {
            message: format!("bad request: {} should be an integer", param),
            param,
        }
    }

    /// Parameter was expected to be at least 1
    pub fn not_positive(param: impl Into<String>) -> Self {
        let param = param.into();
        Self::Validation {
            message: format!("bad request: {} should be a positive integer", param),
            param,
        }
    }

    /// Parameter exceeds the largest value the API accepts
    pub fn too_large(param: impl Into<String>, max: impl fmt::Display) -> Self {
        let param = param.into();
        Self::Validation {
            message: format!("bad request: {} should be at most {}", param, max),
            param,
        }
    }

    /// Query string could not be decoded
    pub fn malformed_query() -> Self {
        Self::Validation {
            param: "query".to_string(),
            message: "bad request: malformed query string".to_string(),
        }
    }

    /// Helper to create a not-found error
    pub fn not_found(entity: impl Into<String>, identifier: impl fmt::Display) -> Self {
        Self::RecordNotFound {
            entity: entity.into(),
            identifier: identifier.to_string(),
        }
    }

    /// Helper to create a database error from any error type
    ///
    /// The source's text is folded into the message so it survives to the
    /// development-mode error payload.
    pub fn database<E: std::error::Error + Send + Sync + 'static>(
        message: impl Into<String>,
        source: E,
    ) -> Self {
        Self::DatabaseError {
            message: format!("{}: {}", message.into(), source),
            source: Some(Box::new(source)),
        }
    }

    /// Helper to create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError {
            message: message.into(),
        }
    }
}

/// Convenience type alias for Results using AppError
pub type Result<T> = std::result::Result<T, AppError>;
