//! Infrastructure layer - SQLite-backed entity store

pub mod db;
pub mod plugins;

pub use plugins::SqlitePluginRepository;
