//! Database infrastructure for the plugin portal
//!
//! Provides SQLite database connectivity, connection pooling, and
//! migrations for the portal's registry storage.

pub mod connection;
pub mod migrations;
pub mod schema;

pub use connection::*;
pub use migrations::*;
pub use schema::*;

use anyhow::Result;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::path::PathBuf;

/// Database configuration for the portal
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Path to the database file
    pub path: PathBuf,
    /// Maximum connections in the pool
    pub max_connections: u32,
    /// Minimum connections to keep in the pool
    pub min_connections: u32,
    /// Connection timeout in seconds
    pub connect_timeout: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("portal.sqlite"),
            max_connections: 10,
            min_connections: 2,
            connect_timeout: 30,
        }
    }
}

/// Database manager owning the portal's connection pool
#[derive(Debug)]
pub struct DatabaseManager {
    config: DatabaseConfig,
    pool: Option<SqlitePool>,
}

impl DatabaseManager {
    /// Create a new database manager
    pub fn new(config: DatabaseConfig) -> Self {
        Self { config, pool: None }
    }

    /// Initialize the database connection pool and run migrations
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The database connection cannot be established
    /// - Migration execution fails
    pub async fn initialize(&mut self) -> Result<()> {
        self.pool = Some(self.create_pool().await?);

        // Run migrations automatically
        self.run_migrations().await?;

        Ok(())
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> Result<&SqlitePool> {
        self.pool
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("Database not initialized. Call initialize() first."))
    }

    /// Create a new connection pool
    async fn create_pool(&self) -> Result<SqlitePool> {
        connection::ensure_database_directory(&self.config.path).await?;

        let options = connection::create_connection_options(&self.config.path)?;

        let pool = SqlitePoolOptions::new()
            .max_connections(self.config.max_connections)
            .min_connections(self.config.min_connections)
            .acquire_timeout(std::time::Duration::from_secs(self.config.connect_timeout))
            .connect_with(options)
            .await?;

        Ok(pool)
    }

    /// Run database migrations
    pub async fn run_migrations(&self) -> Result<()> {
        let pool = self.pool()?;
        migrations::run_migrations(pool).await
    }
}
