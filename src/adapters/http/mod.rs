//! HTTP adapters - REST API implementations.

pub mod reports;

pub use reports::{report_routes, ReportsAppState};
