//! Shared mock reader for report handler tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::foundation::{GoalId, PlanId, SecretariatId};
use crate::domain::reporting::{
    Cutoff, GoalProgressRow, GroupTotals, GroupingKey, NodeRef, Plan,
};
use crate::ports::{PlanProgressReader, StoreError};

pub struct MockPlanProgressReader {
    pub plan: Option<Plan>,
    pub rows: Vec<GoalProgressRow>,
    pub fail_rows: bool,
    pub calls: Mutex<Vec<(Cutoff, Option<SecretariatId>)>>,
}

impl MockPlanProgressReader {
    pub fn with_rows(rows: Vec<GoalProgressRow>) -> Self {
        Self {
            plan: Some(test_plan()),
            rows,
            fail_rows: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn without_plan() -> Self {
        Self {
            plan: None,
            ..Self::with_rows(Vec::new())
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_rows: true,
            ..Self::with_rows(Vec::new())
        }
    }

    pub fn recorded_calls(&self) -> Vec<(Cutoff, Option<SecretariatId>)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlanProgressReader for MockPlanProgressReader {
    async fn get_plan(&self, _plan_id: PlanId) -> Result<Option<Plan>, StoreError> {
        Ok(self.plan.clone())
    }

    async fn get_goals_with_progress(
        &self,
        _plan_id: PlanId,
        cutoff: Cutoff,
        secretariat_id: Option<SecretariatId>,
    ) -> Result<Vec<GoalProgressRow>, StoreError> {
        self.calls.lock().unwrap().push((cutoff, secretariat_id));
        if self.fail_rows {
            return Err(StoreError::Database("Simulated failure".to_string()));
        }
        Ok(self.rows.clone())
    }

    async fn get_group_totals(
        &self,
        _plan_id: PlanId,
        cutoff: Cutoff,
        group_by: GroupingKey,
        secretariat_id: Option<SecretariatId>,
    ) -> Result<Vec<GroupTotals>, StoreError> {
        self.calls.lock().unwrap().push((cutoff, secretariat_id));
        if self.fail_rows {
            return Err(StoreError::Database("Simulated failure".to_string()));
        }
        Ok(GroupTotals::from_rows(&self.rows, group_by))
    }
}

pub fn test_plan() -> Plan {
    Plan {
        id: PlanId::new(1),
        name: "Development Plan 2024-2027".to_string(),
        start_year: 2024,
        end_year: 2027,
    }
}

/// A goal row under line/component/bet/initiative ids `chain`.
pub fn goal_row(
    goal: i64,
    chain: [i64; 4],
    secretariat: i64,
    quota: f64,
    accumulated: f64,
) -> GoalProgressRow {
    GoalProgressRow {
        line: NodeRef::new(chain[0], format!("{}", chain[0]), format!("Line {}", chain[0])),
        component: NodeRef::new(chain[1], format!("C{}", chain[1]), format!("Component {}", chain[1])),
        bet: NodeRef::new(chain[2], format!("B{}", chain[2]), format!("Bet {}", chain[2])),
        initiative: NodeRef::new(chain[3], format!("I{}", chain[3]), format!("Initiative {}", chain[3])),
        goal_id: GoalId::new(goal),
        goal_code: format!("M{}", goal),
        goal_name: format!("Goal {}", goal),
        secretariat_id: Some(SecretariatId::new(secretariat)),
        secretariat_name: Some(format!("Secretariat {}", secretariat)),
        physical_quota: quota,
        physical_accumulated: accumulated,
        financial_quota: 0.0,
        financial_accumulated: 0.0,
    }
}
