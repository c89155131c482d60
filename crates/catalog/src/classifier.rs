//! Maps internal failures to the error payload clients receive

use mockshelf_core::{ApiError, AppError, ErrorKind, RuntimeMode};

/// Message shown instead of internal error text in production
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred while processing your request";

/// Decides the status code and message visibility for every failure
///
/// Validation failures are classified: their status and text reach the client
/// as-is. Everything else is unclassified and answered with 500. Whether the
/// raw text of an unclassified failure is shown depends on the runtime mode.
///
/// Not-found lookups are unclassified unless [`with_not_found_status`] is
/// enabled, so a missing record answers 500 by default.
///
/// [`with_not_found_status`]: ErrorClassifier::with_not_found_status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorClassifier {
    mode: RuntimeMode,
    not_found_status: bool,
}

impl ErrorClassifier {
    pub fn new(mode: RuntimeMode) -> Self {
        Self {
            mode,
            not_found_status: false,
        }
    }

    /// Answers not-found lookups with 404 and their own message
    pub fn with_not_found_status(mut self, enabled: bool) -> Self {
        self.not_found_status = enabled;
        self
    }

    pub fn mode(&self) -> RuntimeMode {
        self.mode
    }

    /// Builds the client-facing payload for `err`
    pub fn classify(&self, err: &AppError) -> ApiError {
        match err.kind() {
            ErrorKind::Validation => ApiError::new(err.status_code(), err.to_string()),
            ErrorKind::NotFound if self.not_found_status => {
                ApiError::new(err.status_code(), err.to_string())
            }
            ErrorKind::NotFound | ErrorKind::Storage | ErrorKind::Internal => {
                self.unclassified(err)
            }
        }
    }

    fn unclassified(&self, err: &AppError) -> ApiError {
        log::error!("Request failed ({}): {}", err.kind(), err);

        let message = if self.mode.hides_internal_errors() {
            GENERIC_ERROR_MESSAGE.to_string()
        } else {
            err.to_string()
        };
        ApiError::new(500, message)
    }
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new(RuntimeMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn storage_failure() -> AppError {
        AppError::database(
            "Failed to list books",
            io::Error::new(io::ErrorKind::Other, "database is locked"),
        )
    }

    #[test]
    fn test_validation_passes_through() {
        for mode in [
            RuntimeMode::Development,
            RuntimeMode::Test,
            RuntimeMode::Production,
        ] {
            let api = ErrorClassifier::new(mode).classify(&AppError::not_an_integer("id"));
            assert_eq!(api, ApiError::new(400, "bad request: id should be an integer"));
        }
    }

    #[test]
    fn test_storage_failure_hidden_in_production() {
        let api = ErrorClassifier::new(RuntimeMode::Production).classify(&storage_failure());
        assert_eq!(api.code, 500);
        assert_eq!(api.message, GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn test_storage_failure_shown_in_development_and_test() {
        let err = storage_failure();
        for mode in [RuntimeMode::Development, RuntimeMode::Test] {
            let api = ErrorClassifier::new(mode).classify(&err);
            assert_eq!(api.code, 500);
            assert_eq!(api.message, err.to_string());
        }
    }

    #[test]
    fn test_not_found_is_unclassified_by_default() {
        let err = AppError::not_found("book", 999);

        let dev = ErrorClassifier::new(RuntimeMode::Development).classify(&err);
        assert_eq!(dev, ApiError::new(500, "record not found: book with id 999"));

        let prod = ErrorClassifier::new(RuntimeMode::Production).classify(&err);
        assert_eq!(prod, ApiError::new(500, GENERIC_ERROR_MESSAGE));
    }

    #[test]
    fn test_not_found_status_opt_in() {
        let classifier = ErrorClassifier::new(RuntimeMode::Production).with_not_found_status(true);

        let api = classifier.classify(&AppError::not_found("book", 999));
        assert_eq!(api, ApiError::new(404, "record not found: book with id 999"));

        // Storage failures stay hidden
        assert_eq!(classifier.classify(&storage_failure()).message, GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn test_internal_error_is_500() {
        let api = ErrorClassifier::default().classify(&AppError::internal("boom"));
        assert_eq!(api, ApiError::new(500, "internal error: boom"));
    }
}
