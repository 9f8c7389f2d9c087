//! GetProgressTreeHandler - Hierarchy tree with rolled-up completion.

use std::sync::Arc;

use crate::domain::reporting::{ProgressTreeBuilder, ProgressTreeReport, TreeNode};
use crate::ports::PlanProgressReader;

use super::report_query::load_plan;
use super::{ReportError, ReportQuery};

/// Result of a progress tree query.
pub type GetProgressTreeResult = ProgressTreeReport;

/// Handler for the progress tree report.
pub struct GetProgressTreeHandler {
    reader: Arc<dyn PlanProgressReader>,
}

impl GetProgressTreeHandler {
    pub fn new(reader: Arc<dyn PlanProgressReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, query: ReportQuery) -> Result<GetProgressTreeResult, ReportError> {
        let scope = query.validate()?;
        let plan = load_plan(self.reader.as_ref(), scope.plan_id).await?;

        let rows = self
            .reader
            .get_goals_with_progress(scope.plan_id, scope.cutoff, scope.secretariat_id)
            .await?;

        let mut builder = ProgressTreeBuilder::new();
        for row in &rows {
            builder.push(row);
        }
        let row_count = builder.row_count();
        let tree = builder.build();

        tracing::debug!(
            plan_id = %scope.plan_id,
            cutoff = %scope.cutoff,
            rows = row_count,
            lines = tree.len(),
            goals = tree.iter().map(TreeNode::goal_count).sum::<usize>(),
            "Built progress tree"
        );

        Ok(ProgressTreeReport {
            plan,
            cutoff: scope.cutoff,
            tree,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::reports::test_support::{goal_row, MockPlanProgressReader};
    use crate::domain::foundation::PlanId;
    use crate::domain::reporting::NodeKind;

    #[tokio::test]
    async fn test_single_chain_rolls_up_goal_percentage() {
        let reader = Arc::new(MockPlanProgressReader::with_rows(vec![goal_row(
            1,
            [1, 1, 1, 1],
            1,
            50.0,
            25.0,
        )]));
        let handler = GetProgressTreeHandler::new(reader);

        let report = handler
            .handle(ReportQuery::new(PlanId::new(1), 2024, "T4"))
            .await
            .unwrap();

        assert_eq!(report.tree.len(), 1);
        let line = &report.tree[0];
        assert_eq!(line.kind, NodeKind::Line);
        assert_eq!(line.percentage.value(), 50.0);
        let goal = &line.children[0].children[0].children[0].children[0];
        assert_eq!(goal.kind, NodeKind::Goal);
        assert_eq!(goal.percentage.value(), 50.0);
    }

    #[tokio::test]
    async fn test_line_is_mean_of_components() {
        let reader = Arc::new(MockPlanProgressReader::with_rows(vec![
            goal_row(1, [1, 1, 1, 1], 1, 100.0, 10.0),
            goal_row(2, [1, 2, 2, 2], 1, 100.0, 90.0),
            goal_row(3, [1, 2, 2, 2], 1, 100.0, 90.0),
        ]));
        let handler = GetProgressTreeHandler::new(reader);

        let report = handler
            .handle(ReportQuery::new(PlanId::new(1), 2024, "T4"))
            .await
            .unwrap();

        assert_eq!(report.tree[0].percentage.value(), 50.0);
    }

    #[tokio::test]
    async fn test_empty_plan_has_empty_tree() {
        let handler = GetProgressTreeHandler::new(Arc::new(MockPlanProgressReader::with_rows(Vec::new())));

        let report = handler
            .handle(ReportQuery::new(PlanId::new(1), 2024, "T1"))
            .await
            .unwrap();

        assert!(report.tree.is_empty());
    }

    #[tokio::test]
    async fn test_store_failure_is_unexpected() {
        let handler = GetProgressTreeHandler::new(Arc::new(MockPlanProgressReader::failing()));

        let result = handler.handle(ReportQuery::new(PlanId::new(1), 2024, "T1")).await;

        assert!(matches!(result, Err(ReportError::Unexpected(_))));
    }
}
