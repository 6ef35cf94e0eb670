//! Wire models
//!
//! JSON shapes exchanged with portal clients. Field names follow the
//! camelCase manifest contract, so these stay separate from the persisted
//! entities and are mapped through [`crate::transform`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Full plugin record as exposed over HTTP: identity, default version,
/// documentation link, and the version map keyed by version string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginIdContainer {
    pub plugin_id: String,
    #[serde(default)]
    pub default_version: Option<String>,
    #[serde(default)]
    pub documentation_link: Option<String>,
    #[serde(default)]
    pub versions: HashMap<String, PluginVersion>,
}

/// One published version as exposed over HTTP.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginVersion {
    pub version: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Free-form version metadata; absent on the wire means empty
    #[serde(default = "empty_metadata")]
    pub metadata: serde_json::Value,
}

fn empty_metadata() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}
