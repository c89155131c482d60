//! Database connection management

use mockshelf_core::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::{Pool, Sqlite};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

/// Database connection pool
pub type DbPool = Pool<Sqlite>;

/// Path that selects a private in-memory database
pub const IN_MEMORY_PATH: &str = ":memory:";

/// How long a connection waits on SQLite's write lock before giving up
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file, or `:memory:`
    pub path: String,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Enable Write-Ahead Logging (WAL) mode
    pub enable_wal: bool,
    /// Create database if it doesn't exist
    pub create_if_missing: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: "mockshelf.db".to_string(),
            max_connections: 10,
            enable_wal: true,
            create_if_missing: true,
        }
    }
}

impl DatabaseConfig {
    /// Creates a new configuration with a custom path
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    /// Sets the maximum number of connections
    pub fn with_max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Enables or disables WAL mode
    pub fn with_wal(mut self, enable: bool) -> Self {
        self.enable_wal = enable;
        self
    }

    /// Sets whether to create the database if missing
    pub fn with_create_if_missing(mut self, create: bool) -> Self {
        self.create_if_missing = create;
        self
    }

    /// Returns true if this configuration selects an in-memory database
    pub fn is_in_memory(&self) -> bool {
        self.path == IN_MEMORY_PATH
    }
}

/// Establishes a connection pool to the database
pub async fn connect(config: DatabaseConfig) -> Result<DbPool, AppError> {
    if config.is_in_memory() {
        return connect_in_memory().await;
    }

    if !database_exists(&config.path) {
        log::info!("Creating database at {}", config.path);
    }

    let mut options = SqliteConnectOptions::new()
        .filename(&config.path)
        .create_if_missing(config.create_if_missing)
        .busy_timeout(BUSY_TIMEOUT);

    // WAL lets readers proceed while a seeder holds the write lock
    if config.enable_wal {
        options = options
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await
        .map_err(|e| AppError::database("Failed to connect to database", e))?;

    log::debug!(
        "Opened database at {} ({} connections max)",
        config.path,
        config.max_connections
    );
    Ok(pool)
}

/// Creates a private in-memory database
///
/// Every SQLite connection to `:memory:` sees its own database, so the pool is
/// pinned to a single connection that is never recycled.
pub async fn connect_in_memory() -> Result<DbPool, AppError> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .map_err(|e| AppError::database("Failed to create in-memory database", e))?
        .journal_mode(SqliteJournalMode::Memory);

    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .map_err(|e| AppError::database("Failed to connect to in-memory database", e))
}

fn database_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_connect_creates_database() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.db").to_str().unwrap().to_string();

        let pool = connect(DatabaseConfig::new(path.clone())).await.unwrap();

        assert!(database_exists(&path));
        pool.close().await;
    }

    #[tokio::test]
    async fn test_connect_with_wal_mode() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("wal.db").to_str().unwrap().to_string();

        let pool = connect(DatabaseConfig::new(path).with_wal(true))
            .await
            .unwrap();

        let result: (String,) = sqlx::query_as("PRAGMA journal_mode;")
            .fetch_one(&pool)
            .await
            .unwrap();

        assert_eq!(result.0.to_lowercase(), "wal");
        pool.close().await;
    }

    #[tokio::test]
    async fn test_connect_missing_without_create_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.db").to_str().unwrap().to_string();

        let result = connect(DatabaseConfig::new(path).with_create_if_missing(false)).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_in_memory_keeps_state_across_queries() {
        let pool = connect(DatabaseConfig::new(IN_MEMORY_PATH)).await.unwrap();

        sqlx::query("CREATE TABLE t (x INTEGER)")
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query("INSERT INTO t VALUES (1)")
            .execute(&pool)
            .await
            .unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM t")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
        pool.close().await;
    }

    #[test]
    fn test_config_builder() {
        let config = DatabaseConfig::new("test.db")
            .with_max_connections(20)
            .with_wal(false)
            .with_create_if_missing(false);

        assert_eq!(config.path, "test.db");
        assert_eq!(config.max_connections, 20);
        assert!(!config.enable_wal);
        assert!(!config.create_if_missing);
        assert!(!config.is_in_memory());
    }

    #[test]
    fn test_config_default() {
        let config = DatabaseConfig::default();

        assert_eq!(config.path, "mockshelf.db");
        assert_eq!(config.max_connections, 10);
        assert!(config.enable_wal);
        assert!(config.create_if_missing);
    }
}
