//! Catalog store settings

use crate::validation::{ConfigSection, ValidationError, Validator};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DatabaseSection {
    /// SQLite file path, or `:memory:` for a throwaway store
    pub path: String,

    pub max_connections: u32,

    /// Use write-ahead logging for file databases
    pub enable_wal: bool,
}

impl Default for DatabaseSection {
    fn default() -> Self {
        Self {
            path: "mockshelf.db".to_string(),
            max_connections: 5,
            enable_wal: true,
        }
    }
}

impl ConfigSection for DatabaseSection {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        Validator::collect_errors(vec![
            Validator::not_empty(&self.path, "database.path"),
            Validator::in_range(self.max_connections, 1, 100, "database.max_connections"),
        ])
    }

    fn section_name(&self) -> &'static str {
        "database"
    }
}
