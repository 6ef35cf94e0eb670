//! Plugin repository trait

use super::entity::{PluginEntity, PluginVersionEntity};
use anyhow::Result;
use async_trait::async_trait;

/// Keyed store for plugins and their versions.
///
/// The HTTP resource holds this as a constructor-passed handle; all
/// operations are a single lookup or a single save.
#[async_trait]
pub trait PluginRepository: Send + Sync {
    /// List every registered plugin with its versions
    async fn find_all(&self) -> Result<Vec<PluginEntity>>;

    /// Get a plugin by its unique name
    async fn find_by_name(&self, name: &str) -> Result<Option<PluginEntity>>;

    /// Get one version of a plugin by exact version string
    async fn find_version(
        &self,
        plugin_name: &str,
        version: &str,
    ) -> Result<Option<PluginVersionEntity>>;

    /// Persist a plugin and reconcile its version rows with the entity's
    /// collection, inside one transaction
    async fn save(&self, plugin: &PluginEntity) -> Result<()>;
}
