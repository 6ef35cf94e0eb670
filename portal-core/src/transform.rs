//! Transformer between persisted entities and wire models
//!
//! Pure field-by-field mapping, no I/O. Both directions are total and
//! lossless for the fields modeled.

use crate::domain::plugins::{PluginEntity, PluginVersionEntity};
use crate::model::{PluginIdContainer, PluginVersion};

/// Map a persisted plugin to its wire shape, keying versions by their
/// version string.
pub fn container_from_entity(entity: &PluginEntity) -> PluginIdContainer {
    PluginIdContainer {
        plugin_id: entity.plugin_name.clone(),
        default_version: entity.default_version.clone(),
        documentation_link: entity.documentation_link.clone(),
        versions: entity
            .versions
            .iter()
            .map(|v| (v.version.clone(), wire_from_version_entity(v)))
            .collect(),
    }
}

/// Map a wire plugin record to its persisted shape.
pub fn entity_from_container(container: &PluginIdContainer) -> PluginEntity {
    PluginEntity {
        plugin_name: container.plugin_id.clone(),
        default_version: container.default_version.clone(),
        documentation_link: container.documentation_link.clone(),
        versions: container
            .versions
            .values()
            .map(version_entity_from_wire)
            .collect(),
    }
}

/// Map a persisted version to its wire shape.
pub fn wire_from_version_entity(entity: &PluginVersionEntity) -> PluginVersion {
    PluginVersion {
        version: entity.version.clone(),
        description: entity.description.clone(),
        metadata: entity.metadata.clone(),
    }
}

/// Map a wire version to its persisted shape.
pub fn version_entity_from_wire(version: &PluginVersion) -> PluginVersionEntity {
    PluginVersionEntity {
        version: version.version.clone(),
        description: version.description.clone(),
        metadata: version.metadata.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_entity() -> PluginEntity {
        PluginEntity {
            plugin_name: "my-plugin".to_string(),
            default_version: Some("1.0".to_string()),
            documentation_link: Some("http://docs".to_string()),
            versions: vec![
                PluginVersionEntity {
                    version: "1.0".to_string(),
                    description: Some("first".to_string()),
                    metadata: json!({"artifact": "my-plugin-1.0.jar"}),
                },
                PluginVersionEntity {
                    version: "2.0-rc.1".to_string(),
                    description: None,
                    metadata: json!({}),
                },
            ],
        }
    }

    #[test]
    fn container_keys_versions_by_version_string() {
        let container = container_from_entity(&sample_entity());

        assert_eq!(container.plugin_id, "my-plugin");
        assert_eq!(container.versions.len(), 2);
        assert_eq!(container.versions["1.0"].description.as_deref(), Some("first"));
        assert_eq!(container.versions["2.0-rc.1"].metadata, json!({}));
    }

    #[test]
    fn entity_round_trips_through_container() {
        let entity = sample_entity();
        let mut restored = entity_from_container(&container_from_entity(&entity));

        restored.versions.sort_by(|a, b| a.version.cmp(&b.version));
        assert_eq!(restored.plugin_name, entity.plugin_name);
        assert_eq!(restored.default_version, entity.default_version);
        assert_eq!(restored.documentation_link, entity.documentation_link);
        assert_eq!(restored.versions, entity.versions);
    }

    #[test]
    fn version_mapping_preserves_metadata() {
        let wire = PluginVersion {
            version: "3.1".to_string(),
            description: None,
            metadata: json!({"checksum": "abc", "deprecated": false}),
        };

        let entity = version_entity_from_wire(&wire);
        assert_eq!(wire_from_version_entity(&entity), wire);
    }
}
