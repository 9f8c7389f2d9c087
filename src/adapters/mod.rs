//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - Axum endpoints for the report queries
//! - `postgres` - PostgreSQL-backed plan store
//! - `storage` - In-memory plan store

pub mod http;
pub mod postgres;
pub mod storage;

pub use storage::InMemoryPlanStore;
