//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, the percentage value object and validation errors
//! that form the vocabulary of plan progress reporting.

mod errors;
mod ids;
mod percentage;

pub use errors::ValidationError;
pub use ids::{GoalId, NodeId, PlanId, SecretariatId};
pub use percentage::Percentage;
