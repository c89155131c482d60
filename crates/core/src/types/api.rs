//! Wire-visible error payload and runtime mode

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error payload sent to HTTP clients as `{code, message}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// HTTP status code; always matches the response status line
    pub code: u16,
    pub message: String,
}

impl ApiError {
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code, self.message)
    }
}

/// Runtime mode controlling how much of an internal failure reaches the client
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeMode {
    #[default]
    #[serde(alias = "dev", alias = "debug")]
    Development,
    Test,
    #[serde(alias = "prod", alias = "release")]
    Production,
}

impl RuntimeMode {
    /// Internal error text is replaced by a generic message in production
    pub fn hides_internal_errors(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for RuntimeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Test => write!(f, "test"),
            Self::Production => write!(f, "production"),
        }
    }
}

/// Returned when a runtime mode name is not recognised
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown runtime mode '{0}' (expected development, test or production)")]
pub struct UnknownMode(pub String);

impl FromStr for RuntimeMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" | "debug" => Ok(Self::Development),
            "test" => Ok(Self::Test),
            "production" | "prod" | "release" => Ok(Self::Production),
            other => Err(UnknownMode(other.to_string())),
        }
    }
}
