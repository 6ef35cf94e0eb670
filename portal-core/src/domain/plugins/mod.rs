//! Plugin domain module
//!
//! Contains the persisted plugin/version entities and the repository
//! trait the HTTP resource talks to.

pub mod entity;
pub mod repository;

pub use entity::*;
pub use repository::*;
