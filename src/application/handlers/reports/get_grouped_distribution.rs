//! GetGroupedDistributionHandler - Band distribution per line, component or secretariat.

use std::sync::Arc;

use crate::domain::reporting::{distribute_by, GroupedDistributionReport, GroupingKey};
use crate::ports::PlanProgressReader;

use super::report_query::load_plan;
use super::{ReportError, ReportQuery};

/// Query for a grouped distribution.
#[derive(Debug, Clone)]
pub struct GetGroupedDistributionQuery {
    pub filter: ReportQuery,
    pub group_by: GroupingKey,
}

/// Result of a grouped distribution query.
pub type GetGroupedDistributionResult = GroupedDistributionReport;

/// Handler for the by-line, by-component and by-secretariat distributions.
pub struct GetGroupedDistributionHandler {
    reader: Arc<dyn PlanProgressReader>,
}

impl GetGroupedDistributionHandler {
    pub fn new(reader: Arc<dyn PlanProgressReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        query: GetGroupedDistributionQuery,
    ) -> Result<GetGroupedDistributionResult, ReportError> {
        let scope = query.filter.validate()?;
        let plan = load_plan(self.reader.as_ref(), scope.plan_id).await?;

        let rows = self
            .reader
            .get_goals_with_progress(scope.plan_id, scope.cutoff, scope.secretariat_id)
            .await?;
        let groups = distribute_by(&rows, query.group_by);

        tracing::debug!(
            plan_id = %scope.plan_id,
            cutoff = %scope.cutoff,
            group_by = query.group_by.as_str(),
            groups = groups.len(),
            "Built grouped distribution"
        );

        Ok(GroupedDistributionReport {
            plan,
            cutoff: scope.cutoff,
            grouped_by: query.group_by,
            groups,
        })
    }
}
