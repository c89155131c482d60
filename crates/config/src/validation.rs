//! Validation helpers shared by every config section

pub use crate::error::ValidationError;
use std::net::SocketAddr;

/// A named table of the config file that can check itself
pub trait ConfigSection: Default {
    /// Returns every invalid field; `Ok` when the section is usable
    fn validate(&self) -> Result<(), Vec<ValidationError>>;

    /// Table name in the config file, e.g. `server`
    fn section_name(&self) -> &'static str;
}

/// Common validators for config values
pub struct Validator;

impl Validator {
    /// Validates that a numeric value is within an inclusive range
    pub fn in_range<T>(value: T, min: T, max: T, field: &str) -> Result<(), ValidationError>
    where
        T: PartialOrd + std::fmt::Display + Copy,
    {
        if value < min || value > max {
            Err(ValidationError::with_value(
                field,
                format!("must be between {} and {}", min, max),
                value,
            ))
        } else {
            Ok(())
        }
    }

    pub fn not_empty(value: &str, field: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            Err(ValidationError::new(field, "must not be empty"))
        } else {
            Ok(())
        }
    }

    /// Validates that `value` parses as `host:port`
    pub fn socket_addr(value: &str, field: &str) -> Result<(), ValidationError> {
        value.parse::<SocketAddr>().map(|_| ()).map_err(|_| {
            ValidationError::with_value(field, "must be an address like 0.0.0.0:8080", value)
        })
    }

    /// Validates that `value` is an absolute http(s) URL
    pub fn http_url(value: &str, field: &str) -> Result<(), ValidationError> {
        let rest = value
            .strip_prefix("http://")
            .or_else(|| value.strip_prefix("https://"));
        match rest {
            Some(host) if !host.is_empty() && !host.starts_with('/') => Ok(()),
            _ => Err(ValidationError::with_value(
                field,
                "must start with http:// or https:// followed by a host",
                value,
            )),
        }
    }

    /// Collects multiple validation results into a single result
    pub fn collect_errors(
        results: Vec<Result<(), ValidationError>>,
    ) -> Result<(), Vec<ValidationError>> {
        let errors: Vec<ValidationError> = results.into_iter().filter_map(|r| r.err()).collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
