//! Route table for the plugin resource

use crate::handlers;
use crate::state::AppState;
use axum::routing::{get, put};
use axum::Router;

/// Base path the plugin resource is mounted under
pub const BASE_PATH: &str = "/api/v1/manifest/plugins";

/// Build the portal router.
///
/// `{id}/defaultVersion` is registered alongside `{id}/{version}`; the
/// static segment wins, so a version literally named `defaultVersion`
/// is not addressable.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/v1/manifest/plugins",
            get(handlers::list_plugins).post(handlers::create_plugin),
        )
        .route(
            "/api/v1/manifest/plugins/{id}",
            get(handlers::get_plugin).post(handlers::add_version),
        )
        .route(
            "/api/v1/manifest/plugins/{id}/defaultVersion",
            put(handlers::set_default_version),
        )
        .route(
            "/api/v1/manifest/plugins/{id}/{version}",
            get(handlers::get_version).delete(handlers::delete_version),
        )
        .with_state(state)
}
