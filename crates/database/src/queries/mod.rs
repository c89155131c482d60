//! Database query operations organized by entity

pub mod books;

// Re-export commonly used query functions
pub use books::{count_books, count_matching, find_by_id, insert_book, list_page};
