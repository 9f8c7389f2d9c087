//! HTTP DTOs for report endpoints.
//!
//! Reports are read-only, so we only have response DTOs.
//! The domain report models are already designed for serialization,
//! so we re-export them directly.

pub use crate::domain::reporting::{
    BandCounts, ClassifiedGoal, DistributionReport, GroupDistribution, GroupedDistributionReport,
    ProgressTreeReport, RankingEntry, RankingReport, TreeNode,
};

use serde::{Deserialize, Serialize};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Query parameters shared by every report endpoint.
///
/// Kept as raw strings so missing or malformed values are reported with
/// our own validation messages.
#[derive(Debug, Default, Deserialize)]
pub struct ReportParams {
    pub year: Option<String>,
    pub quarter: Option<String>,
    pub secretariat_id: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: message.into(),
        }
    }

    pub fn internal() -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: "An unexpected error occurred".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_error_hides_details() {
        let json = serde_json::to_value(ErrorResponse::internal()).unwrap();
        assert_eq!(json["code"], "INTERNAL_ERROR");
        assert_eq!(json["message"], "An unexpected error occurred");
    }

    #[test]
    fn params_deserialize_with_missing_fields() {
        let params: ReportParams = serde_json::from_str(r#"{"year":"2024"}"#).unwrap();
        assert_eq!(params.year.as_deref(), Some("2024"));
        assert!(params.quarter.is_none());
        assert!(params.secretariat_id.is_none());
    }
}
