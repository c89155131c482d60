//! Catalog item domain model

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Unique identifier for a book
///
/// Assigned once at seed time and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(i64);

impl BookId {
    /// Creates a BookId from a raw integer
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw integer value
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl FromStr for BookId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(Self)
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single catalog record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub category: String,
    #[serde(rename = "desc", default)]
    pub description: String,
    #[serde(default)]
    pub cover_url: String,
}

impl Book {
    /// Creates a book with the required fields; the rest start empty
    pub fn new(id: i64, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: BookId::new(id),
            title: title.into(),
            author: author.into(),
            category: String::new(),
            description: String::new(),
            cover_url: String::new(),
        }
    }

    /// Returns true if `search` is empty or appears in the title or author
    ///
    /// Matching is a case-sensitive substring test.
    pub fn matches(&self, search: &str) -> bool {
        search.is_empty() || self.title.contains(search) || self.author.contains(search)
    }
}
