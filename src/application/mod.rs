//! Application layer - Queries and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Every report is a read-only query; nothing here writes back to the store.

pub mod handlers;

pub use handlers::{ReportError, ReportQuery};
