//! Plugin Portal Core Library
//!
//! Shared core for the plugin portal: domain entities, the repository
//! trait over the entity store, wire models, the transformer between the
//! two shapes, and the SQLite infrastructure backing it all.

pub mod domain;
pub mod infrastructure;
pub mod model;
pub mod transform;

// Re-export common types for convenience
pub use domain::plugins::{PluginEntity, PluginRepository, PluginVersionEntity};
pub use infrastructure::db;
pub use model::{PluginIdContainer, PluginVersion};
