//! Database schema definitions and SQL statements

/// Database schema version
pub const SCHEMA_VERSION: &str = "001";

/// Create all database tables
pub fn create_tables_sql() -> &'static str {
    r#"
    -- Plugins table - one row per registered plugin
    CREATE TABLE IF NOT EXISTS plugins (
        plugin_name TEXT PRIMARY KEY NOT NULL,
        default_version TEXT,
        documentation_link TEXT,
        created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
        updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
    );

    -- Plugin versions table - versions owned by their plugin, unique per
    -- (plugin, version string)
    CREATE TABLE IF NOT EXISTS plugin_versions (
        plugin_name TEXT NOT NULL,
        version TEXT NOT NULL,
        description TEXT,
        metadata TEXT NOT NULL DEFAULT '{}',
        created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
        PRIMARY KEY (plugin_name, version),
        FOREIGN KEY (plugin_name) REFERENCES plugins(plugin_name) ON DELETE CASCADE
    );

    CREATE INDEX IF NOT EXISTS idx_plugin_versions_plugin_name ON plugin_versions(plugin_name);
    "#
}

/// Drop all database tables (for testing/reset purposes)
pub fn drop_tables_sql() -> &'static str {
    r#"
    DROP TABLE IF EXISTS plugin_versions;
    DROP TABLE IF EXISTS plugins;
    "#
}

/// Create schema version table
pub fn create_schema_version_table_sql() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS schema_version (
        version TEXT PRIMARY KEY NOT NULL,
        applied_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
        description TEXT
    );
    "#
}

/// Get current schema version
pub fn get_schema_version_sql() -> &'static str {
    "SELECT version FROM schema_version ORDER BY version DESC LIMIT 1"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_version() {
        assert_eq!(SCHEMA_VERSION, "001");
    }

    #[test]
    fn test_create_tables_sql() {
        let sql = create_tables_sql();
        assert!(sql.contains("CREATE TABLE IF NOT EXISTS plugins"));
        assert!(sql.contains("CREATE TABLE IF NOT EXISTS plugin_versions"));
        assert!(sql.contains("ON DELETE CASCADE"));
        assert!(sql.contains("PRIMARY KEY (plugin_name, version)"));
    }

    #[test]
    fn test_drop_tables_sql() {
        let sql = drop_tables_sql();
        assert!(sql.contains("DROP TABLE IF EXISTS plugin_versions"));
        assert!(sql.contains("DROP TABLE IF EXISTS plugins"));
    }

    #[test]
    fn test_create_schema_version_table_sql() {
        let sql = create_schema_version_table_sql();
        assert!(sql.contains("CREATE TABLE IF NOT EXISTS schema_version"));
        assert!(sql.contains("version TEXT PRIMARY KEY"));
    }
}
