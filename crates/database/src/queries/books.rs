//! Book database operations

use crate::DbPool;
use mockshelf_core::gateway::window_offset;
use mockshelf_core::{AppError, Book, BookId};
use sqlx::{Executor, Sqlite};

/// Inserts a book with its preassigned identifier
pub async fn insert_book<'e, E>(executor: E, book: &Book) -> Result<(), AppError>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query(
        r#"
        INSERT INTO books (id, title, author, category, description, cover_url)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(book.id.as_i64())
    .bind(&book.title)
    .bind(&book.author)
    .bind(&book.category)
    .bind(&book.description)
    .bind(&book.cover_url)
    .execute(executor)
    .await
    .map_err(|e| AppError::database(format!("Failed to insert book {}", book.id), e))?;

    Ok(())
}

/// Gets a book by ID
pub async fn find_by_id(pool: &DbPool, id: BookId) -> Result<Book, AppError> {
    let row = sqlx::query(
        r#"
        SELECT id, title, author, category, description, cover_url
        FROM books WHERE id = ?
        "#,
    )
    .bind(id.as_i64())
    .fetch_optional(pool)
    .await
    .map_err(|e| AppError::database("Failed to fetch book", e))?
    .ok_or_else(|| AppError::not_found("book", id))?;

    row_to_book(row)
}

/// Lists one window of books matching `search`, in identifier order
///
/// An empty `search` matches every book. Otherwise a book matches when `search`
/// occurs in its title or author; `instr` keeps the comparison case-sensitive,
/// unlike SQLite's `LIKE`.
pub async fn list_page(
    pool: &DbPool,
    page: u32,
    page_size: u32,
    search: &str,
) -> Result<Vec<Book>, AppError> {
    let offset = i64::try_from(window_offset(page, page_size)).unwrap_or(i64::MAX);

    let rows = sqlx::query(
        r#"
        SELECT id, title, author, category, description, cover_url
        FROM books
        WHERE (? = '' OR instr(title, ?) > 0 OR instr(author, ?) > 0)
        ORDER BY id
        LIMIT ? OFFSET ?
        "#,
    )
    .bind(search)
    .bind(search)
    .bind(search)
    .bind(i64::from(page_size))
    .bind(offset)
    .fetch_all(pool)
    .await
    .map_err(|e| AppError::database("Failed to list books", e))?;

    rows.into_iter().map(row_to_book).collect()
}

/// Counts every book matching `search` with the same predicate as [`list_page`]
pub async fn count_matching(pool: &DbPool, search: &str) -> Result<u64, AppError> {
    let count: i64 = sqlx::query_scalar(
        r#"
        SELECT COUNT(*)
        FROM books
        WHERE (? = '' OR instr(title, ?) > 0 OR instr(author, ?) > 0)
        "#,
    )
    .bind(search)
    .bind(search)
    .bind(search)
    .fetch_one(pool)
    .await
    .map_err(|e| AppError::database("Failed to count books", e))?;

    Ok(count.max(0) as u64)
}

/// Counts every book in the store
pub async fn count_books<'e, E>(executor: E) -> Result<u64, AppError>
where
    E: Executor<'e, Database = Sqlite>,
{
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
        .fetch_one(executor)
        .await
        .map_err(|e| AppError::database("Failed to count books", e))?;

    Ok(count.max(0) as u64)
}

/// Converts a database row to a Book
pub(crate) fn row_to_book(row: sqlx::sqlite::SqliteRow) -> Result<Book, AppError> {
    use sqlx::Row;

    let id: i64 = row
        .try_get("id")
        .map_err(|e| AppError::database("Missing book ID", e))?;

    Ok(Book {
        id: BookId::new(id),
        title: row
            .try_get("title")
            .map_err(|e| AppError::database("Missing title", e))?,
        author: row
            .try_get("author")
            .map_err(|e| AppError::database("Missing author", e))?,
        category: row.try_get("category").unwrap_or_default(),
        description: row.try_get("description").unwrap_or_default(),
        cover_url: row.try_get("cover_url").unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::connect_in_memory;
    use crate::migrations::run_migrations;
    use mockshelf_core::ErrorKind;

    async fn setup() -> Result<DbPool, AppError> {
        let pool = connect_in_memory().await?;
        run_migrations(&pool).await?;
        Ok(pool)
    }

    async fn setup_with(books: &[Book]) -> DbPool {
        let pool = setup().await.expect("Failed to setup database");
        for book in books {
            insert_book(&pool, book).await.expect("Failed to insert book");
        }
        pool
    }

    fn numbered(count: i64) -> Vec<Book> {
        (1..=count)
            .map(|i| Book::new(i, format!("Book {}", i), format!("Author {}", i)))
            .collect()
    }

    #[tokio::test]
    async fn test_insert_and_find_book() {
        let mut book = Book::new(7, "Clean Code", "Robert C. Martin");
        book.category = "Programming".to_string();
        book.description = "A handbook of agile software craftsmanship".to_string();
        book.cover_url = "http://localhost:8080/static/images/clean-code.jpg".to_string();
        let pool = setup_with(std::slice::from_ref(&book)).await;

        let retrieved = find_by_id(&pool, BookId::new(7))
            .await
            .expect("Failed to get book");
        assert_eq!(retrieved, book);
    }

    #[tokio::test]
    async fn test_find_missing_book() {
        let pool = setup_with(&numbered(3)).await;

        let err = find_by_id(&pool, BookId::new(999)).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_duplicate_id_rejected() {
        let pool = setup_with(&numbered(1)).await;

        let err = insert_book(&pool, &Book::new(1, "Again", "Someone"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Storage);
    }

    #[tokio::test]
    async fn test_list_page_windows() {
        let pool = setup_with(&numbered(25)).await;

        let first = list_page(&pool, 1, 10, "").await.unwrap();
        let ids: Vec<i64> = first.iter().map(|b| b.id.as_i64()).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<_>>());

        let last = list_page(&pool, 3, 10, "").await.unwrap();
        let ids: Vec<i64> = last.iter().map(|b| b.id.as_i64()).collect();
        assert_eq!(ids, (21..=25).collect::<Vec<_>>());

        let beyond = list_page(&pool, 4, 10, "").await.unwrap();
        assert!(beyond.is_empty());
    }

    #[tokio::test]
    async fn test_list_page_far_beyond_end() {
        let pool = setup_with(&numbered(5)).await;

        let page = list_page(&pool, u32::MAX, u32::MAX, "").await.unwrap();
        assert!(page.is_empty());
    }

    #[tokio::test]
    async fn test_search_title_or_author() {
        let books = vec![
            Book::new(1, "The Go Programming Language", "Alan A. A. Donovan"),
            Book::new(2, "Deep Learning", "Ian Goodfellow"),
            Book::new(3, "Clean Code", "Robert C. Martin"),
        ];
        let pool = setup_with(&books).await;

        let found = list_page(&pool, 1, 10, "Go").await.unwrap();
        let ids: Vec<i64> = found.iter().map(|b| b.id.as_i64()).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(count_matching(&pool, "Go").await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_search_is_case_sensitive() {
        let books = vec![
            Book::new(1, "Clean Code", "Robert C. Martin"),
            Book::new(2, "clean architecture", "someone"),
        ];
        let pool = setup_with(&books).await;

        assert_eq!(count_matching(&pool, "Clean").await.unwrap(), 1);
        assert_eq!(count_matching(&pool, "clean").await.unwrap(), 1);
        assert_eq!(count_matching(&pool, "CLEAN").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_search_treats_wildcards_literally() {
        let books = vec![
            Book::new(1, "100% Coverage", "Tester"),
            Book::new(2, "Plain Title", "Writer"),
        ];
        let pool = setup_with(&books).await;

        assert_eq!(count_matching(&pool, "%").await.unwrap(), 1);
        assert_eq!(count_matching(&pool, "_").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_search_applies_before_window() {
        let mut books = numbered(30);
        for book in books.iter_mut().filter(|b| b.id.as_i64() % 3 == 0) {
            book.title = format!("Rust {}", book.id);
        }
        let pool = setup_with(&books).await;

        assert_eq!(count_matching(&pool, "Rust").await.unwrap(), 10);

        let second = list_page(&pool, 2, 4, "Rust").await.unwrap();
        let ids: Vec<i64> = second.iter().map(|b| b.id.as_i64()).collect();
        assert_eq!(ids, vec![15, 18, 21, 24]);
    }

    #[tokio::test]
    async fn test_count_empty_search_counts_all() {
        let pool = setup_with(&numbered(12)).await;

        assert_eq!(count_matching(&pool, "").await.unwrap(), 12);
        assert_eq!(count_books(&pool).await.unwrap(), 12);
    }

    #[tokio::test]
    async fn test_count_independent_of_window() {
        let pool = setup_with(&numbered(12)).await;

        for search in ["", "Book", "Author 1", "nothing"] {
            let total = count_matching(&pool, search).await.unwrap();
            let page_size = u32::try_from(total.max(1)).unwrap();
            let all = list_page(&pool, 1, page_size, search).await.unwrap();
            assert_eq!(all.len() as u64, total, "search {:?}", search);
        }
    }
}
