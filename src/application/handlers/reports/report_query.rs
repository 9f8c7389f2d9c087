//! Common report filter shared by every report query.

use crate::domain::foundation::{PlanId, SecretariatId, ValidationError};
use crate::domain::reporting::{Cutoff, Plan};
use crate::ports::PlanProgressReader;

use super::ReportError;

/// Filter accepted by all seven report queries.
///
/// `plan_id`, `year` and `quarter` are required; they are optional here so
/// that a missing value surfaces as a validation error instead of a
/// deserialization failure.
#[derive(Debug, Clone, Default)]
pub struct ReportQuery {
    pub plan_id: Option<PlanId>,
    pub year: Option<i32>,
    pub quarter: Option<String>,
    pub secretariat_id: Option<SecretariatId>,
}

/// A validated report filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportScope {
    pub plan_id: PlanId,
    pub cutoff: Cutoff,
    pub secretariat_id: Option<SecretariatId>,
}

impl ReportQuery {
    pub fn new(plan_id: PlanId, year: i32, quarter: impl Into<String>) -> Self {
        Self {
            plan_id: Some(plan_id),
            year: Some(year),
            quarter: Some(quarter.into()),
            secretariat_id: None,
        }
    }

    pub fn with_secretariat(mut self, secretariat_id: SecretariatId) -> Self {
        self.secretariat_id = Some(secretariat_id);
        self
    }

    /// Checks required fields and resolves the cutoff.
    pub fn validate(&self) -> Result<ReportScope, ValidationError> {
        let plan_id = self.plan_id.ok_or_else(|| ValidationError::missing_field("planId"))?;
        let year = self.year.ok_or_else(|| ValidationError::missing_field("year"))?;
        let quarter = self
            .quarter
            .as_deref()
            .filter(|q| !q.trim().is_empty())
            .ok_or_else(|| ValidationError::missing_field("quarter"))?;

        Ok(ReportScope {
            plan_id,
            cutoff: Cutoff::resolve(year, Some(quarter)),
            secretariat_id: self.secretariat_id,
        })
    }
}

/// Loads the plan a report is about, failing with `PlanNotFound` when absent.
pub(super) async fn load_plan(
    reader: &dyn PlanProgressReader,
    plan_id: PlanId,
) -> Result<Plan, ReportError> {
    reader
        .get_plan(plan_id)
        .await?
        .ok_or(ReportError::PlanNotFound(plan_id))
}
