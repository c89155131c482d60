//! How API failures are presented to clients

use crate::validation::{ConfigSection, ValidationError};
use mockshelf_core::RuntimeMode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// `production` hides the text of unclassified failures
    pub mode: RuntimeMode,

    /// Answer missing records with 404 instead of 500
    pub not_found_status: bool,
}

impl ConfigSection for ApiConfig {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        Ok(())
    }

    fn section_name(&self) -> &'static str {
        "api"
    }
}
