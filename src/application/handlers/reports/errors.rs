//! Report query errors.

use crate::domain::foundation::{PlanId, ValidationError};
use crate::ports::StoreError;

/// Errors that can occur while producing a report.
///
/// Every report either fully succeeds or fails with one of these; no
/// partial report is ever returned.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// A required filter is missing or malformed.
    #[error("Invalid report filter: {0}")]
    Validation(#[from] ValidationError),

    #[error("Plan not found: {0}")]
    PlanNotFound(PlanId),

    /// Any other failure. The message is for logs only.
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl From<StoreError> for ReportError {
    fn from(err: StoreError) -> Self {
        ReportError::Unexpected(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_become_unexpected() {
        let error: ReportError = StoreError::Database("connection reset".to_string()).into();
        match error {
            ReportError::Unexpected(msg) => assert!(msg.contains("connection reset")),
            other => panic!("Expected Unexpected, got {:?}", other),
        }
    }

    #[test]
    fn validation_errors_convert() {
        let error: ReportError = ValidationError::missing_field("year").into();
        assert!(matches!(error, ReportError::Validation(_)));
        assert_eq!(format!("{}", error), "Invalid report filter: Field 'year' is required");
    }

    #[test]
    fn not_found_names_the_plan() {
        let error = ReportError::PlanNotFound(PlanId::new(12));
        assert_eq!(format!("{}", error), "Plan not found: 12");
    }
}
