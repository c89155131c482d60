//! The storage seam between the catalog service and a concrete store

use crate::error::Result;
use crate::types::{Book, BookId};
use std::future::Future;

/// Outcome of a seeding attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The store was empty and this many items were inserted
    Seeded(u64),
    /// The store already held this many items; nothing was written
    AlreadyPopulated(u64),
}

impl SeedOutcome {
    /// Number of items in the store after the attempt
    pub fn item_count(&self) -> u64 {
        match self {
            Self::Seeded(n) | Self::AlreadyPopulated(n) => *n,
        }
    }
}

/// Catalog storage operations used by the catalog service
///
/// Reads must be safe to issue concurrently. `seed_if_empty` must be atomic with
/// respect to other seeding attempts against the same store: at most one attempt
/// populates data, the others observe a non-empty store and return
/// [`SeedOutcome::AlreadyPopulated`].
pub trait CatalogGateway: Send + Sync {
    /// Ensures the schema exists and inserts the seed set if the store is empty
    fn seed_if_empty(&self) -> impl Future<Output = Result<SeedOutcome>> + Send;

    /// Looks up a single book by identifier
    fn find_by_id(&self, id: BookId) -> impl Future<Output = Result<Book>> + Send;

    /// Returns up to `page_size` matching books starting at `(page - 1) * page_size`,
    /// in identifier order
    fn list_page(
        &self,
        page: u32,
        page_size: u32,
        search: &str,
    ) -> impl Future<Output = Result<Vec<Book>>> + Send;

    /// Counts every book matching `search`, independent of any window
    fn count_matching(&self, search: &str) -> impl Future<Output = Result<u64>> + Send;
}

/// Offset of the first item on `page`
///
/// Page numbers below 1 are treated as 1.
pub fn window_offset(page: u32, page_size: u32) -> u64 {
    u64::from(page.saturating_sub(1)) * u64::from(page_size)
}
