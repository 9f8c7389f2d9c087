//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `PlanProgressReader` - Plan metadata, joined goal rows and group totals

mod plan_progress_reader;

pub use plan_progress_reader::{PlanProgressReader, StoreError};
