//! Request handlers

pub mod books;
mod health;

pub use books::{get_book, list_books, ListParams};
pub use health::healthz;
