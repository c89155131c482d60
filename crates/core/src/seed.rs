//! The fixed catalog every store is seeded with

use crate::error::{AppError, Result};
use crate::types::{Book, BookId};
use serde::Deserialize;

/// Base URL used for cover links when none is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Path under which cover images are served
pub const COVER_IMAGE_PATH: &str = "/static/images/";

const SEED_DATA: &str = include_str!("../data/books.json");

#[derive(Debug, Deserialize)]
struct SeedRecord {
    id: i64,
    title: String,
    author: String,
    category: String,
    desc: String,
    cover: String,
}

/// Builds the cover URL for an image file name
pub fn cover_url(base_url: &str, file_name: &str) -> String {
    format!(
        "{}{}{}",
        base_url.trim_end_matches('/'),
        COVER_IMAGE_PATH,
        file_name
    )
}

/// Returns the seed catalog with cover URLs rooted at `base_url`
pub fn seed_books(base_url: &str) -> Result<Vec<Book>> {
    let records: Vec<SeedRecord> = serde_json::from_str(SEED_DATA)
        .map_err(|e| AppError::internal(format!("Failed to load seed data: {}", e)))?;

    Ok(records
        .into_iter()
        .map(|record| Book {
            id: BookId::new(record.id),
            title: record.title,
            author: record.author,
            category: record.category,
            description: record.desc,
            cover_url: cover_url(base_url, &record.cover),
        })
        .collect())
}
