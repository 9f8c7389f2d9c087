//! GetDistributionHandler - Band distribution over a whole plan.

use std::sync::Arc;

use crate::domain::reporting::{distribute, DistributionReport};
use crate::ports::PlanProgressReader;

use super::report_query::load_plan;
use super::{ReportError, ReportQuery};

/// Result of a global distribution query.
pub type GetDistributionResult = DistributionReport;

/// Handler for the plan-wide band distribution.
pub struct GetDistributionHandler {
    reader: Arc<dyn PlanProgressReader>,
}

impl GetDistributionHandler {
    pub fn new(reader: Arc<dyn PlanProgressReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, query: ReportQuery) -> Result<GetDistributionResult, ReportError> {
        let scope = query.validate()?;
        let plan = load_plan(self.reader.as_ref(), scope.plan_id).await?;

        let rows = self
            .reader
            .get_goals_with_progress(scope.plan_id, scope.cutoff, scope.secretariat_id)
            .await?;
        let distribution = distribute(&rows);

        tracing::debug!(
            plan_id = %scope.plan_id,
            cutoff = %scope.cutoff,
            goals = distribution.counts.total(),
            "Built plan distribution"
        );

        Ok(DistributionReport {
            plan,
            cutoff: scope.cutoff,
            goals: distribution.goals,
            counts: distribution.counts,
        })
    }
}
