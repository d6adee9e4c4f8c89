//! # warden-database
//!
//! Storage backends for Warden. The `postgres` module holds the
//! production repositories; the `memory` module holds the single-node
//! fallback used in development and tests. `StorageBackend` dispatches
//! between them based on configuration.

pub mod backend;
pub mod connection;
pub mod memory;
pub mod migration;
pub mod postgres;

pub use backend::StorageBackend;
pub use connection::DatabasePool;
