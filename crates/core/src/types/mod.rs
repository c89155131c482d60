//! Domain types for Mockshelf
//!
//! - `book`: catalog items and their identifiers
//! - `page`: page requests, page results and page arithmetic
//! - `api`: the wire error payload and the runtime mode that shapes it

mod api;
mod book;
mod page;

pub use api::{ApiError, RuntimeMode, UnknownMode};
pub use book::{Book, BookId};
pub use page::{total_pages, PageRequest, PageResult, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
