//! Database connection management utilities

use anyhow::{anyhow, Context};
use sqlx::sqlite::SqliteConnectOptions;
use std::path::Path;
use std::str::FromStr;

/// Create SQLite connection options from a database path.
///
/// Foreign keys are switched on so version rows follow their plugin row;
/// WAL keeps concurrent readers out of the writers' way.
pub fn create_connection_options(path: &Path) -> anyhow::Result<SqliteConnectOptions> {
    validate_database_path(path)?;

    let database_url = format!("sqlite:{}", path.display());

    let options = SqliteConnectOptions::from_str(&database_url)?
        .create_if_missing(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
        .foreign_keys(true)
        .busy_timeout(std::time::Duration::from_secs(30));

    Ok(options)
}

/// Check if database file exists
pub fn database_exists(path: &Path) -> bool {
    path.exists()
}

/// Create database directory structure
pub async fn ensure_database_directory(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    Ok(())
}

pub(crate) fn validate_database_path(path: &Path) -> anyhow::Result<()> {
    if path.exists() {
        let meta = std::fs::symlink_metadata(path)
            .with_context(|| format!("Failed to read metadata for {:?}", path))?;

        if meta.file_type().is_symlink() {
            return Err(anyhow!("Database path cannot be a symlink"));
        }

        if !meta.file_type().is_file() {
            return Err(anyhow!("Database path must be a regular file"));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_connection_options() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.db");
        let options = create_connection_options(&db_path);
        assert!(options.is_ok());
    }

    #[test]
    fn test_validate_rejects_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert!(validate_database_path(temp_dir.path()).is_err());
    }

    #[test]
    fn test_database_exists() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("missing.db");
        assert!(!database_exists(&db_path));

        std::fs::write(&db_path, b"").unwrap();
        assert!(database_exists(&db_path));
    }

    #[tokio::test]
    async fn test_ensure_database_directory() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("nested").join("dir").join("test.db");

        ensure_database_directory(&db_path).await.unwrap();
        assert!(db_path.parent().unwrap().exists());
    }
}
