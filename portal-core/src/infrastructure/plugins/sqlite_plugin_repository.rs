//! SQLite-backed plugin repository
//!
//! Stores plugins and their versions in two relational tables with
//! parameterized queries. Saving a plugin reconciles its version rows
//! with the entity's collection inside a single transaction, so the
//! version collection on the entity is authoritative.

use crate::domain::plugins::{PluginEntity, PluginRepository, PluginVersionEntity};
use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use std::collections::HashMap;

/// SQLite-backed implementation of [`PluginRepository`]
#[derive(Debug, Clone)]
pub struct SqlitePluginRepository {
    pool: SqlitePool,
}

impl SqlitePluginRepository {
    /// Create a new SQLite plugin repository over an initialized pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Parse a plugin_versions row into a version entity
    fn row_to_version(row: &sqlx::sqlite::SqliteRow) -> Result<PluginVersionEntity> {
        let metadata: String = row.get("metadata");
        let metadata = serde_json::from_str(&metadata)
            .with_context(|| format!("Invalid version metadata JSON: {}", metadata))?;

        Ok(PluginVersionEntity {
            version: row.get("version"),
            description: row.get("description"),
            metadata,
        })
    }

    /// Parse a plugins row into a plugin entity with an empty version list
    fn row_to_plugin(row: &sqlx::sqlite::SqliteRow) -> PluginEntity {
        PluginEntity {
            plugin_name: row.get("plugin_name"),
            default_version: row.get("default_version"),
            documentation_link: row.get("documentation_link"),
            versions: Vec::new(),
        }
    }

    /// Fetch the version rows belonging to one plugin
    async fn versions_of(&self, plugin_name: &str) -> Result<Vec<PluginVersionEntity>> {
        let rows = sqlx::query(
            "SELECT version, description, metadata FROM plugin_versions \
             WHERE plugin_name = $1 ORDER BY version",
        )
        .bind(plugin_name)
        .fetch_all(&self.pool)
        .await
        .context("Failed to load plugin versions")?;

        rows.iter().map(Self::row_to_version).collect()
    }
}

#[async_trait]
impl PluginRepository for SqlitePluginRepository {
    async fn find_all(&self) -> Result<Vec<PluginEntity>> {
        let plugin_rows = sqlx::query(
            "SELECT plugin_name, default_version, documentation_link FROM plugins \
             ORDER BY plugin_name",
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to list plugins")?;

        let version_rows = sqlx::query(
            "SELECT plugin_name, version, description, metadata FROM plugin_versions \
             ORDER BY plugin_name, version",
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to list plugin versions")?;

        let mut versions_by_plugin: HashMap<String, Vec<PluginVersionEntity>> = HashMap::new();
        for row in &version_rows {
            let plugin_name: String = row.get("plugin_name");
            versions_by_plugin
                .entry(plugin_name)
                .or_default()
                .push(Self::row_to_version(row)?);
        }

        let mut plugins = Vec::with_capacity(plugin_rows.len());
        for row in &plugin_rows {
            let mut plugin = Self::row_to_plugin(row);
            if let Some(versions) = versions_by_plugin.remove(&plugin.plugin_name) {
                plugin.versions = versions;
            }
            plugins.push(plugin);
        }

        Ok(plugins)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<PluginEntity>> {
        let row = sqlx::query(
            "SELECT plugin_name, default_version, documentation_link FROM plugins \
             WHERE plugin_name = $1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to get plugin by name")?;

        match row {
            Some(row) => {
                let mut plugin = Self::row_to_plugin(&row);
                plugin.versions = self.versions_of(name).await?;
                Ok(Some(plugin))
            }
            None => Ok(None),
        }
    }

    async fn find_version(
        &self,
        plugin_name: &str,
        version: &str,
    ) -> Result<Option<PluginVersionEntity>> {
        let row = sqlx::query(
            "SELECT version, description, metadata FROM plugin_versions \
             WHERE plugin_name = $1 AND version = $2",
        )
        .bind(plugin_name)
        .bind(version)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to get plugin version")?;

        match row {
            Some(row) => Ok(Some(Self::row_to_version(&row)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, plugin: &PluginEntity) -> Result<()> {
        let mut tx = self.pool.begin().await.context("Failed to begin save")?;

        sqlx::query(
            r#"
            INSERT INTO plugins (plugin_name, default_version, documentation_link)
            VALUES ($1, $2, $3)
            ON CONFLICT(plugin_name) DO UPDATE SET
                default_version = excluded.default_version,
                documentation_link = excluded.documentation_link,
                updated_at = CURRENT_TIMESTAMP
            "#,
        )
        .bind(&plugin.plugin_name)
        .bind(&plugin.default_version)
        .bind(&plugin.documentation_link)
        .execute(&mut *tx)
        .await
        .context("Failed to save plugin")?;

        // The entity's collection is authoritative: drop every stored row
        // and re-insert what the entity carries.
        sqlx::query("DELETE FROM plugin_versions WHERE plugin_name = $1")
            .bind(&plugin.plugin_name)
            .execute(&mut *tx)
            .await
            .context("Failed to clear plugin versions")?;

        for version in &plugin.versions {
            let metadata = serde_json::to_string(&version.metadata)
                .context("Failed to serialize version metadata")?;

            sqlx::query(
                r#"
                INSERT INTO plugin_versions (plugin_name, version, description, metadata)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(&plugin.plugin_name)
            .bind(&version.version)
            .bind(&version.description)
            .bind(metadata)
            .execute(&mut *tx)
            .await
            .with_context(|| format!("Failed to save version {}", version.version))?;
        }

        tx.commit().await.context("Failed to commit save")?;

        Ok(())
    }
}
