//! HTTP binding for the Mockshelf catalog
//!
//! Exposes the catalog as JSON over axum:
//!
//! - `GET /api/books/{id}`: one book
//! - `GET /api/books?page&page_size&search`: a page of books
//! - `GET /static/*`: cover images and other assets
//!
//! A host application calls [`mount`] with its own router and a gateway. The
//! store is seeded first; a seeding failure is returned instead of a router.

mod error;
pub mod handlers;
mod router;
mod state;

pub use error::ErrorResponse;
pub use handlers::ListParams;
pub use router::{mount, routes, static_routes, MountOptions};
pub use state::AppState;
