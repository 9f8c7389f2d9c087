//! PostgreSQL adapters - Database implementations for reader ports.
//!
//! - `PostgresPlanProgressReader` - Joined goal rows and group totals for reports

mod plan_progress_reader;

pub use plan_progress_reader::PostgresPlanProgressReader;
