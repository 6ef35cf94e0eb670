//! Plugin resource handlers
//!
//! Each operation is one existence check against the store followed by at
//! most one save. Plugin lookup always runs first and short-circuits with
//! 404; version-scoped operations then check the version the same way.
//! Conflict checks compare identifiers by exact string equality.

use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::{OriginalUri, Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use portal_core::transform;
use portal_core::{PluginIdContainer, PluginVersion};
use std::collections::HashMap;

/// `GET /` - map of pluginId to full plugin record for every plugin
pub async fn list_plugins(
    State(state): State<AppState>,
) -> Result<Json<HashMap<String, PluginIdContainer>>, ApiError> {
    let plugins = state.plugins.find_all().await?;

    let collected = plugins
        .iter()
        .map(|plugin| {
            let container = transform::container_from_entity(plugin);
            (container.plugin_id.clone(), container)
        })
        .collect();

    Ok(Json(collected))
}

/// `POST /` - register a new plugin; 409 if the id is taken
pub async fn create_plugin(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Json(container): Json<PluginIdContainer>,
) -> Result<Response, ApiError> {
    if state
        .plugins
        .find_by_name(&container.plugin_id)
        .await?
        .is_some()
    {
        return Err(ApiError::Conflict);
    }

    let entity = transform::entity_from_container(&container);
    state.plugins.save(&entity).await?;

    Ok(created(child_location(uri.path(), &container.plugin_id)))
}

/// `GET /{id}` - one plugin with its version map
pub async fn get_plugin(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PluginIdContainer>, ApiError> {
    let plugin = state
        .plugins
        .find_by_name(&id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(transform::container_from_entity(&plugin)))
}

/// `GET /{id}/{version}` - one version of a plugin
pub async fn get_version(
    State(state): State<AppState>,
    Path((id, version)): Path<(String, String)>,
) -> Result<Json<PluginVersion>, ApiError> {
    if state.plugins.find_by_name(&id).await?.is_none() {
        return Err(ApiError::NotFound);
    }

    let entity = state
        .plugins
        .find_version(&id, &version)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(transform::wire_from_version_entity(&entity)))
}

/// `DELETE /{id}/{version}` - remove one version from the plugin
pub async fn delete_version(
    State(state): State<AppState>,
    Path((id, version)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    let mut plugin = state
        .plugins
        .find_by_name(&id)
        .await?
        .ok_or(ApiError::NotFound)?;

    if state.plugins.find_version(&id, &version).await?.is_none() {
        return Err(ApiError::NotFound);
    }

    plugin.remove_version(&version);
    state.plugins.save(&plugin).await?;

    Ok(StatusCode::OK)
}

/// `POST /{id}` - publish a new version under an existing plugin
///
/// The Location header appends the new version string to the request
/// path, the same way the plugin id is appended on create.
pub async fn add_version(
    State(state): State<AppState>,
    Path(id): Path<String>,
    OriginalUri(uri): OriginalUri,
    Json(version): Json<PluginVersion>,
) -> Result<Response, ApiError> {
    let mut plugin = state
        .plugins
        .find_by_name(&id)
        .await?
        .ok_or(ApiError::NotFound)?;

    if state
        .plugins
        .find_version(&id, &version.version)
        .await?
        .is_some()
    {
        return Err(ApiError::Conflict);
    }

    plugin
        .versions
        .push(transform::version_entity_from_wire(&version));
    state.plugins.save(&plugin).await?;

    Ok(created(child_location(uri.path(), &version.version)))
}

/// `PUT /{id}/defaultVersion` - designate an existing version as default
///
/// The body is the raw version string; it is stored as-is once the
/// lookup confirms the version exists.
pub async fn set_default_version(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: String,
) -> Result<StatusCode, ApiError> {
    let mut plugin = state
        .plugins
        .find_by_name(&id)
        .await?
        .ok_or(ApiError::NotFound)?;

    if state.plugins.find_version(&id, &body).await?.is_none() {
        return Err(ApiError::NotFoundMessage(format!(
            "Version {body} doesn't exist."
        )));
    }

    plugin.default_version = Some(body);
    state.plugins.save(&plugin).await?;

    Ok(StatusCode::OK)
}

/// 201 with a Location header
fn created(location: String) -> Response {
    (StatusCode::CREATED, [(header::LOCATION, location)]).into_response()
}

/// Append an identifying segment to the current request path
fn child_location(request_path: &str, segment: &str) -> String {
    format!("{}/{}", request_path.trim_end_matches('/'), segment)
}
