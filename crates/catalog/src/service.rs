//! Catalog service: lookups and paginated listings

use mockshelf_core::{AppError, Book, BookId, CatalogGateway, PageRequest, PageResult, SeedOutcome};
use std::sync::Arc;

/// Single authority on page/page_size/search semantics
///
/// Errors from the gateway are passed through unchanged.
#[derive(Debug)]
pub struct CatalogService<G> {
    gateway: Arc<G>,
}

impl<G> Clone for CatalogService<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
        }
    }
}

impl<G: CatalogGateway> CatalogService<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway: Arc::new(gateway),
        }
    }

    /// Returns the gateway this service reads through
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Seeds the underlying store if it is empty
    pub async fn seed(&self) -> Result<SeedOutcome, AppError> {
        self.gateway.seed_if_empty().await
    }

    /// Looks up one book
    pub async fn get_by_id(&self, id: BookId) -> Result<Book, AppError> {
        self.gateway.find_by_id(id).await
    }

    /// Fetches one page of books plus pagination metadata
    ///
    /// The listing and the count are both issued before either result is
    /// inspected; a listing failure wins over a count failure.
    pub async fn get_page(&self, request: &PageRequest) -> Result<PageResult<Book>, AppError> {
        let listing = self
            .gateway
            .list_page(request.page(), request.page_size(), request.search())
            .await;
        let count = self.gateway.count_matching(request.search()).await;

        let data = listing?;
        let total_items = count?;

        Ok(PageResult::new(data, request, total_items))
    }
}
