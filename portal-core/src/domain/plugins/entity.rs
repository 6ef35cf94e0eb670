//! Plugin entities

use serde::{Deserialize, Serialize};

/// A registered plugin with its published versions.
///
/// `plugin_name` is globally unique and immutable after creation. The
/// version collection is owned exclusively by the plugin: version rows
/// are reconciled against it on every save and cannot outlive it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginEntity {
    /// Unique plugin identifier
    pub plugin_name: String,
    /// Version string designated as the recommended release; when set it
    /// names an entry of `versions`
    pub default_version: Option<String>,
    /// Link to the plugin's documentation
    pub documentation_link: Option<String>,
    /// Published versions, unique by version string within this plugin
    pub versions: Vec<PluginVersionEntity>,
}

/// One published revision of a plugin, identified by
/// (owning plugin, version string).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginVersionEntity {
    /// Version string, unique within the owning plugin
    pub version: String,
    /// Human-readable release notes
    pub description: Option<String>,
    /// Free-form version metadata
    pub metadata: serde_json::Value,
}

impl PluginEntity {
    /// Create a plugin with no versions yet
    pub fn new(
        plugin_name: String,
        default_version: Option<String>,
        documentation_link: Option<String>,
    ) -> Self {
        Self {
            plugin_name,
            default_version,
            documentation_link,
            versions: Vec::new(),
        }
    }

    /// Find a version entry by exact string match
    pub fn version(&self, version: &str) -> Option<&PluginVersionEntity> {
        self.versions.iter().find(|v| v.version == version)
    }

    /// Remove a version entry by exact string match; returns whether an
    /// entry was removed
    pub fn remove_version(&mut self, version: &str) -> bool {
        let before = self.versions.len();
        self.versions.retain(|v| v.version != version);
        self.versions.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn version(v: &str) -> PluginVersionEntity {
        PluginVersionEntity {
            version: v.to_string(),
            description: None,
            metadata: serde_json::Value::Object(serde_json::Map::new()),
        }
    }

    #[test]
    fn version_lookup_is_exact() {
        let mut plugin = PluginEntity::new("p".to_string(), None, None);
        plugin.versions.push(version("1.0"));

        assert!(plugin.version("1.0").is_some());
        assert!(plugin.version("1.0.0").is_none());
        assert!(plugin.version("1.0 ").is_none());
    }

    #[test]
    fn remove_version_reports_whether_present() {
        let mut plugin = PluginEntity::new("p".to_string(), None, None);
        plugin.versions.push(version("1.0"));
        plugin.versions.push(version("2.0"));

        assert!(plugin.remove_version("1.0"));
        assert!(!plugin.remove_version("1.0"));
        assert_eq!(plugin.versions.len(), 1);
        assert_eq!(plugin.versions[0].version, "2.0");
    }
}
