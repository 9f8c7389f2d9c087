//! Storage Adapters
//!
//! Implementations of the PlanProgressReader port.
//!
//! ## Available Adapters
//!
//! - **InMemoryPlanStore** - Holds plan entities in memory (testing/development)
//!
//! The PostgreSQL implementation lives in `adapters::postgres`.

mod in_memory_plan_store;

pub use in_memory_plan_store::InMemoryPlanStore;
