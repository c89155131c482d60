//! SQLite-backed catalog gateway

use crate::queries::books;
use crate::seed;
use crate::DbPool;
use mockshelf_core::{seed_books, AppError, Book, BookId, CatalogGateway, SeedOutcome};

/// Catalog gateway over a SQLite pool
#[derive(Debug, Clone)]
pub struct SqliteGateway {
    pool: DbPool,
    seed: Vec<Book>,
}

impl SqliteGateway {
    /// Creates a gateway that seeds the store with `seed` when empty
    pub fn new(pool: DbPool, seed: Vec<Book>) -> Self {
        Self { pool, seed }
    }

    /// Creates a gateway seeded with the bundled catalog, covers rooted at `base_url`
    pub fn with_default_seed(pool: DbPool, base_url: &str) -> Result<Self, AppError> {
        Ok(Self::new(pool, seed_books(base_url)?))
    }

    /// Returns the underlying pool
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

impl CatalogGateway for SqliteGateway {
    async fn seed_if_empty(&self) -> Result<SeedOutcome, AppError> {
        seed::seed_if_empty(&self.pool, &self.seed).await
    }

    async fn find_by_id(&self, id: BookId) -> Result<Book, AppError> {
        books::find_by_id(&self.pool, id).await
    }

    async fn list_page(
        &self,
        page: u32,
        page_size: u32,
        search: &str,
    ) -> Result<Vec<Book>, AppError> {
        log::debug!(
            "Listing books page={} page_size={} search={:?}",
            page,
            page_size,
            search
        );
        books::list_page(&self.pool, page, page_size, search).await
    }

    async fn count_matching(&self, search: &str) -> Result<u64, AppError> {
        books::count_matching(&self.pool, search).await
    }
}
