//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, percentage, errors)
//! - `reporting` - Progress aggregation: cutoffs, trees, distributions, rankings

pub mod foundation;
pub mod reporting;
