//! GetRankingHandler - Groups ranked by weighted completion.

use std::sync::Arc;

use crate::domain::reporting::{rank, GroupingKey, RankingReport};
use crate::ports::PlanProgressReader;

use super::report_query::load_plan;
use super::{ReportError, ReportQuery};

/// Query for a ranking report.
#[derive(Debug, Clone)]
pub struct GetRankingQuery {
    pub filter: ReportQuery,
    pub group_by: GroupingKey,
}

/// Result of a ranking query.
pub type GetRankingResult = RankingReport;

/// Handler for the by-component and by-secretariat rankings.
pub struct GetRankingHandler {
    reader: Arc<dyn PlanProgressReader>,
}

impl GetRankingHandler {
    pub fn new(reader: Arc<dyn PlanProgressReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, query: GetRankingQuery) -> Result<GetRankingResult, ReportError> {
        let scope = query.filter.validate()?;
        let plan = load_plan(self.reader.as_ref(), scope.plan_id).await?;

        let totals = self
            .reader
            .get_group_totals(scope.plan_id, scope.cutoff, query.group_by, scope.secretariat_id)
            .await?;
        let ranking = rank(totals);

        tracing::debug!(
            plan_id = %scope.plan_id,
            cutoff = %scope.cutoff,
            group_by = query.group_by.as_str(),
            groups = ranking.len(),
            "Built ranking"
        );

        Ok(RankingReport {
            plan,
            cutoff: scope.cutoff,
            grouped_by: query.group_by,
            ranking,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::reports::test_support::{goal_row, MockPlanProgressReader};
    use crate::domain::foundation::PlanId;

    fn query(group_by: GroupingKey) -> GetRankingQuery {
        GetRankingQuery {
            filter: ReportQuery::new(PlanId::new(1), 2024, "T4"),
            group_by,
        }
    }

    #[tokio::test]
    async fn test_ranks_components_by_weighted_percentage() {
        let reader = Arc::new(MockPlanProgressReader::with_rows(vec![
            goal_row(1, [1, 1, 1, 1], 1, 100.0, 50.0),
            goal_row(2, [1, 1, 1, 1], 1, 10.0, 10.0),
            goal_row(3, [1, 2, 2, 2], 2, 10.0, 9.0),
        ]));
        let handler = GetRankingHandler::new(reader);

        let report = handler.handle(query(GroupingKey::Component)).await.unwrap();

        assert_eq!(report.ranking.len(), 2);
        assert_eq!(report.ranking[0].id, Some(2));
        assert_eq!(report.ranking[0].percentage.value(), 90.0);
        assert_eq!(report.ranking[1].id, Some(1));
        assert_eq!(report.ranking[1].percentage.value(), 54.55);
        assert_eq!(report.ranking[1].goal_count, 2);
    }

    #[tokio::test]
    async fn test_ranks_secretariats_with_ties_by_id() {
        let reader = Arc::new(MockPlanProgressReader::with_rows(vec![
            goal_row(1, [1, 1, 1, 1], 5, 10.0, 5.0),
            goal_row(2, [1, 1, 1, 1], 3, 20.0, 10.0),
        ]));
        let handler = GetRankingHandler::new(reader);

        let report = handler.handle(query(GroupingKey::Secretariat)).await.unwrap();

        let ids: Vec<_> = report.ranking.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![Some(3), Some(5)]);
    }

    #[tokio::test]
    async fn test_validation_precedes_lookup() {
        let handler = GetRankingHandler::new(Arc::new(MockPlanProgressReader::without_plan()));
        let mut ranking_query = query(GroupingKey::Component);
        ranking_query.filter.plan_id = None;

        let result = handler.handle(ranking_query).await;

        assert!(matches!(result, Err(ReportError::Validation(_))));
    }
}
