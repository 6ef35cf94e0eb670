//! Domain layer - plugin registry entities and store contracts

pub mod plugins;

pub use plugins::{PluginEntity, PluginRepository, PluginVersionEntity};
