//! Application layer logic for todo-mile.
//!
//! This crate wires the pure list operations to a storage slot, keeps the
//! write-through discipline, and provides configuration shared by front ends.

pub mod config;
pub mod notice;
pub mod service;
pub mod store;

// Re-exports for convenience
pub use config::{ProjectConfig, StorageConfig, ViewConfig, resolve_data_dir};
pub use notice::{Notice, Severity};
pub use service::{ServiceError, TodoService};
pub use store::ListStore;
