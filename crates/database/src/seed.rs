//! One-time population of an empty store

use crate::migrations::run_migrations;
use crate::queries::books::{count_books, insert_book};
use crate::DbPool;
use mockshelf_core::{AppError, Book, SeedOutcome};
use sqlx::SqliteConnection;

/// Inserts `books` if and only if the store holds no books
///
/// The existence check and the inserts run inside one `BEGIN IMMEDIATE`
/// transaction, which takes SQLite's write lock up front. A concurrent seeder
/// waits on that lock, then sees the committed rows and writes nothing. Either
/// every book is inserted or none is.
pub async fn seed_if_empty(pool: &DbPool, books: &[Book]) -> Result<SeedOutcome, AppError> {
    run_migrations(pool).await?;

    let mut conn = pool
        .acquire()
        .await
        .map_err(|e| AppError::database("Failed to acquire connection for seeding", e))?;

    sqlx::query("BEGIN IMMEDIATE")
        .execute(&mut *conn)
        .await
        .map_err(|e| AppError::database("Failed to begin seeding transaction", e))?;

    let result = match seed_locked(&mut conn, books).await {
        Ok(outcome) => sqlx::query("COMMIT")
            .execute(&mut *conn)
            .await
            .map(|_| outcome)
            .map_err(|e| AppError::database("Failed to commit seed data", e)),
        Err(e) => Err(e),
    };

    if result.is_err() {
        if let Err(e) = sqlx::query("ROLLBACK").execute(&mut *conn).await {
            log::error!("Failed to roll back seeding transaction: {}", e);
        }
    }

    match &result {
        Ok(SeedOutcome::Seeded(n)) => log::info!("Seeded catalog with {} books", n),
        Ok(SeedOutcome::AlreadyPopulated(n)) => {
            log::info!("Catalog already holds {} books, skipping seed", n)
        }
        Err(e) => log::error!("Seeding failed: {}", e),
    }

    result
}

async fn seed_locked(conn: &mut SqliteConnection, books: &[Book]) -> Result<SeedOutcome, AppError> {
    let existing = count_books(&mut *conn).await?;
    if existing > 0 {
        return Ok(SeedOutcome::AlreadyPopulated(existing));
    }

    for book in books {
        insert_book(&mut *conn, book).await?;
    }

    Ok(SeedOutcome::Seeded(books.len() as u64))
}
