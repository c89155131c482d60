//! Mockshelf core types
//!
//! Domain model, error taxonomy and the storage seam shared by every other
//! Mockshelf crate.

pub mod error;
pub mod gateway;
pub mod seed;
pub mod types;

// Re-export commonly used types
pub use error::{AppError, ErrorKind, Result};
pub use gateway::{CatalogGateway, SeedOutcome};
pub use seed::{seed_books, DEFAULT_BASE_URL};
pub use types::{ApiError, Book, BookId, PageRequest, PageResult, RuntimeMode};
