//! Shared application state

use portal_core::PluginRepository;
use std::sync::Arc;

/// State handed to every handler: the entity store handle, passed in at
/// construction rather than resolved from any ambient container.
#[derive(Clone)]
pub struct AppState {
    pub plugins: Arc<dyn PluginRepository>,
}

impl AppState {
    pub fn new(plugins: Arc<dyn PluginRepository>) -> Self {
        Self { plugins }
    }
}
