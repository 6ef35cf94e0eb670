//! Database migration system using sqlx

use sqlx::{Row, SqlitePool};
use tracing::info;

/// Migration definition
pub struct Migration {
    /// Migration version (e.g., "001", "002")
    pub version: &'static str,
    /// Migration description
    pub description: &'static str,
    /// SQL to apply the migration (UP)
    pub up: &'static str,
    /// SQL to revert the migration (DOWN)
    pub down: &'static str,
}

/// All known migrations, sorted by version
fn all_migrations() -> Vec<Migration> {
    vec![Migration {
        version: "001",
        description: "Initial plugin registry schema",
        up: crate::infrastructure::db::schema::create_tables_sql(),
        down: crate::infrastructure::db::schema::drop_tables_sql(),
    }]
}

/// Migration manager
pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl MigrationManager {
    /// Create new migration manager
    pub fn new() -> Self {
        Self {
            migrations: all_migrations(),
        }
    }

    /// Get current schema version from database
    pub async fn get_current_version(&self, pool: &SqlitePool) -> anyhow::Result<Option<String>> {
        let result = sqlx::query(crate::infrastructure::db::schema::get_schema_version_sql())
            .fetch_optional(pool)
            .await?;

        match result {
            Some(row) => {
                let version: String = row.get("version");
                Ok(Some(version))
            }
            None => Ok(None),
        }
    }

    /// Run pending migrations
    pub async fn run_migrations(&self, pool: &SqlitePool) -> anyhow::Result<()> {
        self.ensure_schema_version_table(pool).await?;

        let current_version = self.get_current_version(pool).await?;
        let pending: Vec<&Migration> = self
            .migrations
            .iter()
            .filter(|m| match &current_version {
                Some(current) => m.version > current.as_str(),
                None => true,
            })
            .collect();

        if pending.is_empty() {
            info!("Database is up to date");
            return Ok(());
        }

        info!("Running {} pending migrations", pending.len());

        for migration in pending {
            info!(
                "Applying migration {}: {}",
                migration.version, migration.description
            );

            let mut tx = pool.begin().await?;

            sqlx::raw_sql(migration.up).execute(&mut *tx).await?;

            sqlx::query(
                "INSERT OR REPLACE INTO schema_version (version, description) VALUES ($1, $2)",
            )
            .bind(migration.version)
            .bind(migration.description)
            .execute(&mut *tx)
            .await?;

            tx.commit().await?;

            info!("Applied migration {}", migration.version);
        }

        Ok(())
    }

    /// Ensure schema_version table exists
    async fn ensure_schema_version_table(&self, pool: &SqlitePool) -> anyhow::Result<()> {
        let create_table_sql = crate::infrastructure::db::schema::create_schema_version_table_sql();

        sqlx::raw_sql(create_table_sql).execute(pool).await?;

        Ok(())
    }
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Run all pending migrations
pub async fn run_migrations(pool: &SqlitePool) -> anyhow::Result<()> {
    let manager = MigrationManager::new();
    manager.run_migrations(pool).await
}

/// Get current schema version
pub async fn get_schema_version(pool: &SqlitePool) -> anyhow::Result<Option<String>> {
    let manager = MigrationManager::new();
    manager.get_current_version(pool).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_are_ordered() {
        let migrations = all_migrations();
        assert!(!migrations.is_empty());
        assert!(migrations.windows(2).all(|w| w[0].version < w[1].version));
    }

    #[test]
    fn test_initial_migration_matches_schema_version() {
        let migrations = all_migrations();
        assert_eq!(
            migrations.last().unwrap().version,
            crate::infrastructure::db::schema::SCHEMA_VERSION
        );
    }
}
