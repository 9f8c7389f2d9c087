//! Report HTTP adapter module.
//!
//! Provides REST API endpoints for the seven plan progress reports.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::ErrorResponse;
pub use handlers::ReportsAppState;
pub use routes::report_routes;
