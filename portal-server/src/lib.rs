//! Plugin Portal HTTP surface
//!
//! Exposes the registry as a CRUD resource under
//! `/api/v1/manifest/plugins`, delegating every operation to the
//! [`portal_core::PluginRepository`] handle carried in [`state::AppState`].

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::router;
pub use state::AppState;
