//! Mockshelf catalog service
//!
//! The business-rule layer between the HTTP binding and a
//! [`CatalogGateway`](mockshelf_core::CatalogGateway):
//! - [`CatalogService`] owns pagination arithmetic and the page envelope
//! - [`ErrorClassifier`] turns any [`AppError`](mockshelf_core::AppError) into the
//!   `{code, message}` payload clients see
//! - [`MemoryGateway`] is a store-free gateway for tests and SQL-less hosts

mod classifier;
mod memory;
mod service;

pub use classifier::{ErrorClassifier, GENERIC_ERROR_MESSAGE};
pub use memory::MemoryGateway;
pub use service::CatalogService;
