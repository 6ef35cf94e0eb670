//! SQLite-backed plugin repository

pub mod sqlite_plugin_repository;

pub use sqlite_plugin_repository::SqlitePluginRepository;
