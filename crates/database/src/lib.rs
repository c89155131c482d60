//! Mockshelf Database Layer
//!
//! SQLite catalog store for Mockshelf, built on sqlx. Provides the connection
//! pool, schema migrations, transactional seeding and the [`SqliteGateway`]
//! implementation of [`mockshelf_core::CatalogGateway`].

pub mod connection;
pub mod gateway;
pub mod migrations;
pub mod queries;
pub mod seed;

pub use connection::{connect, connect_in_memory, DatabaseConfig, DbPool};
pub use gateway::SqliteGateway;
pub use migrations::{run_migrations, verify_integrity, CURRENT_VERSION};
pub use seed::seed_if_empty;
