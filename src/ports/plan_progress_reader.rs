use async_trait::async_trait;

use crate::domain::foundation::{PlanId, SecretariatId};
use crate::domain::reporting::{Cutoff, GoalProgressRow, GroupTotals, GroupingKey, Plan};

/// Read-only port onto the plan and hierarchy store.
///
/// Implementations return rows already joined with their ancestors and
/// already accumulated up to the cutoff.
#[async_trait]
pub trait PlanProgressReader: Send + Sync {
    /// Gets plan metadata, `None` when the plan does not exist.
    async fn get_plan(&self, plan_id: PlanId) -> Result<Option<Plan>, StoreError>;

    /// Gets every goal of the plan with its progress accumulated up to `cutoff`.
    ///
    /// Rows are ordered by line, component, bet and initiative code, then goal code.
    async fn get_goals_with_progress(
        &self,
        plan_id: PlanId,
        cutoff: Cutoff,
        secretariat_id: Option<SecretariatId>,
    ) -> Result<Vec<GoalProgressRow>, StoreError>;

    /// Gets per-group physical sums for a ranking.
    async fn get_group_totals(
        &self,
        plan_id: PlanId,
        cutoff: Cutoff,
        group_by: GroupingKey,
        secretariat_id: Option<SecretariatId>,
    ) -> Result<Vec<GroupTotals>, StoreError>;
}

/// Errors raised by the plan store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Malformed row: {0}")]
    MalformedRow(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Database(err.to_string())
    }
}
