//! In-memory catalog gateway

use mockshelf_core::gateway::window_offset;
use mockshelf_core::{AppError, Book, BookId, CatalogGateway, SeedOutcome};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Catalog gateway holding its books in process memory
///
/// Applies the same filter and ordering as the SQLite store.
#[derive(Debug, Default)]
pub struct MemoryGateway {
    books: RwLock<Vec<Book>>,
    seed: Vec<Book>,
}

impl MemoryGateway {
    /// Creates an empty store that seeds itself with `seed`
    pub fn new(seed: Vec<Book>) -> Self {
        Self {
            books: RwLock::new(Vec::new()),
            seed,
        }
    }

    /// Creates a store already holding `books`
    pub fn with_books(mut books: Vec<Book>) -> Self {
        books.sort_by_key(|b| b.id);
        Self {
            books: RwLock::new(books),
            seed: Vec::new(),
        }
    }

    /// Number of books currently held
    pub fn len(&self) -> Result<usize, AppError> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, AppError> {
        Ok(self.read()?.is_empty())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Book>>, AppError> {
        self.books
            .read()
            .map_err(|_| AppError::internal("catalog lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Book>>, AppError> {
        self.books
            .write()
            .map_err(|_| AppError::internal("catalog lock poisoned"))
    }
}

impl CatalogGateway for MemoryGateway {
    async fn seed_if_empty(&self) -> Result<SeedOutcome, AppError> {
        let mut books = self.write()?;
        if !books.is_empty() {
            return Ok(SeedOutcome::AlreadyPopulated(books.len() as u64));
        }

        let mut seed = self.seed.clone();
        seed.sort_by_key(|b| b.id);
        seed.dedup_by_key(|b| b.id);
        if seed.len() != self.seed.len() {
            return Err(AppError::internal("seed data contains duplicate ids"));
        }

        *books = seed;
        Ok(SeedOutcome::Seeded(books.len() as u64))
    }

    async fn find_by_id(&self, id: BookId) -> Result<Book, AppError> {
        let books = self.read()?;
        books
            .binary_search_by_key(&id, |b| b.id)
            .map(|index| books[index].clone())
            .map_err(|_| AppError::not_found("book", id))
    }

    async fn list_page(
        &self,
        page: u32,
        page_size: u32,
        search: &str,
    ) -> Result<Vec<Book>, AppError> {
        let offset = usize::try_from(window_offset(page, page_size)).unwrap_or(usize::MAX);
        let books = self.read()?;

        Ok(books
            .iter()
            .filter(|b| b.matches(search))
            .skip(offset)
            .take(page_size as usize)
            .cloned()
            .collect())
    }

    async fn count_matching(&self, search: &str) -> Result<u64, AppError> {
        let books = self.read()?;
        Ok(books.iter().filter(|b| b.matches(search)).count() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockshelf_core::{seed_books, ErrorKind, DEFAULT_BASE_URL};
    use std::sync::Arc;

    fn catalog() -> Vec<Book> {
        seed_books(DEFAULT_BASE_URL).unwrap()
    }

    #[tokio::test]
    async fn test_seed_once() {
        let gateway = MemoryGateway::new(catalog());

        assert_eq!(gateway.seed_if_empty().await.unwrap(), SeedOutcome::Seeded(50));
        assert_eq!(
            gateway.seed_if_empty().await.unwrap(),
            SeedOutcome::AlreadyPopulated(50)
        );
        assert_eq!(gateway.len().unwrap(), 50);
    }

    #[tokio::test]
    async fn test_seed_rejects_duplicate_ids() {
        let mut seed = catalog();
        seed[10].id = seed[0].id;
        let gateway = MemoryGateway::new(seed);

        assert!(gateway.seed_if_empty().await.is_err());
        assert!(gateway.is_empty().unwrap());
    }

    #[tokio::test]
    async fn test_concurrent_seeding_populates_once() {
        let gateway = Arc::new(MemoryGateway::new(catalog()));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let gateway = Arc::clone(&gateway);
            handles.push(tokio::spawn(async move { gateway.seed_if_empty().await }));
        }

        let mut seeded = 0;
        for handle in handles {
            if let SeedOutcome::Seeded(_) = handle.await.unwrap().unwrap() {
                seeded += 1;
            }
        }
        assert_eq!(seeded, 1);
        assert_eq!(gateway.len().unwrap(), 50);
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let gateway = MemoryGateway::with_books(catalog());

        let book = gateway.find_by_id(BookId::new(35)).await.unwrap();
        assert_eq!(book.title, "Docker Deep Dive");

        let err = gateway.find_by_id(BookId::new(999)).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_list_and_count_agree() {
        let gateway = MemoryGateway::with_books(catalog());

        for search in ["", "Go", "Java", "python", "C++"] {
            let count = gateway.count_matching(search).await.unwrap();
            let all = gateway.list_page(1, 50, search).await.unwrap();
            assert_eq!(count, all.len() as u64, "search {:?}", search);
        }
    }

    #[tokio::test]
    async fn test_search_window() {
        let gateway = MemoryGateway::with_books(catalog());

        let second = gateway.list_page(2, 2, "Java").await.unwrap();
        let ids: Vec<i64> = second.iter().map(|b| b.id.as_i64()).collect();
        assert_eq!(ids, vec![20, 21]);
    }

    #[tokio::test]
    async fn test_page_beyond_end_is_empty() {
        let gateway = MemoryGateway::with_books(catalog());

        assert!(gateway.list_page(6, 10, "").await.unwrap().is_empty());
        assert!(gateway.list_page(u32::MAX, u32::MAX, "").await.unwrap().is_empty());
    }
}
