//! In-Memory Plan Store Adapter
//!
//! Holds plans, hierarchy nodes, goals and progress records in memory and
//! serves the reporting port from them. Useful for testing and development.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{NodeId, PlanId, SecretariatId};
use crate::domain::reporting::{
    Cutoff, Goal, GoalProgressRow, GroupTotals, GroupingKey, HierarchyNode, NodeRef, Plan,
    ProgressRecord, Secretariat,
};
use crate::ports::{PlanProgressReader, StoreError};

#[derive(Debug, Default)]
struct PlanData {
    plans: HashMap<PlanId, Plan>,
    secretariats: HashMap<SecretariatId, Secretariat>,
    nodes: HashMap<NodeId, HierarchyNode>,
    goals: Vec<Goal>,
    records: Vec<ProgressRecord>,
}

impl PlanData {
    fn node(&self, id: Option<NodeId>) -> Option<&HierarchyNode> {
        id.and_then(|id| self.nodes.get(&id))
    }

    fn row_for(&self, goal: &Goal, cutoff: Cutoff) -> GoalProgressRow {
        let initiative = self.node(goal.initiative_id);
        let bet = initiative.and_then(|n| self.node(n.parent_id));
        let component = bet.and_then(|n| self.node(n.parent_id));
        let line = component.and_then(|n| self.node(n.parent_id));
        let to_ref = |node: Option<&HierarchyNode>| node.map(HierarchyNode::to_ref).unwrap_or_else(NodeRef::orphan);

        let accumulated = goal.accumulated_at(&self.records, cutoff);
        let secretariat = goal.secretariat_id.and_then(|id| self.secretariats.get(&id));

        GoalProgressRow {
            line: to_ref(line),
            component: to_ref(component),
            bet: to_ref(bet),
            initiative: to_ref(initiative),
            goal_id: goal.id,
            goal_code: goal.code.clone(),
            goal_name: goal.name.clone(),
            secretariat_id: goal.secretariat_id,
            secretariat_name: secretariat.map(|s| s.name.clone()),
            physical_quota: goal.physical.quota(),
            physical_accumulated: accumulated.physical,
            financial_quota: goal.budget.quota(),
            financial_accumulated: accumulated.financial,
        }
    }
}

/// In-memory plan store
#[derive(Debug, Clone, Default)]
pub struct InMemoryPlanStore {
    data: Arc<RwLock<PlanData>>,
}

impl InMemoryPlanStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_plan(&self, plan: Plan) {
        self.data.write().await.plans.insert(plan.id, plan);
    }

    pub async fn insert_secretariat(&self, secretariat: Secretariat) {
        self.data
            .write()
            .await
            .secretariats
            .insert(secretariat.id, secretariat);
    }

    pub async fn insert_node(&self, node: HierarchyNode) {
        self.data.write().await.nodes.insert(node.id, node);
    }

    pub async fn insert_goal(&self, goal: Goal) {
        self.data.write().await.goals.push(goal);
    }

    pub async fn insert_progress(&self, record: ProgressRecord) {
        self.data.write().await.records.push(record);
    }
}

#[async_trait]
impl PlanProgressReader for InMemoryPlanStore {
    async fn get_plan(&self, plan_id: PlanId) -> Result<Option<Plan>, StoreError> {
        Ok(self.data.read().await.plans.get(&plan_id).cloned())
    }

    async fn get_goals_with_progress(
        &self,
        plan_id: PlanId,
        cutoff: Cutoff,
        secretariat_id: Option<SecretariatId>,
    ) -> Result<Vec<GoalProgressRow>, StoreError> {
        let data = self.data.read().await;
        let mut rows: Vec<GoalProgressRow> = data
            .goals
            .iter()
            .filter(|g| g.plan_id == plan_id)
            .filter(|g| secretariat_id.map_or(true, |s| g.secretariat_id == Some(s)))
            .map(|g| data.row_for(g, cutoff))
            .collect();

        rows.sort_by(|a, b| {
            a.line
                .code
                .cmp(&b.line.code)
                .then_with(|| a.component.code.cmp(&b.component.code))
                .then_with(|| a.bet.code.cmp(&b.bet.code))
                .then_with(|| a.initiative.code.cmp(&b.initiative.code))
                .then_with(|| a.goal_code.cmp(&b.goal_code))
        });

        Ok(rows)
    }

    async fn get_group_totals(
        &self,
        plan_id: PlanId,
        cutoff: Cutoff,
        group_by: GroupingKey,
        secretariat_id: Option<SecretariatId>,
    ) -> Result<Vec<GroupTotals>, StoreError> {
        let rows = self
            .get_goals_with_progress(plan_id, cutoff, secretariat_id)
            .await?;
        Ok(GroupTotals::from_rows(&rows, group_by))
    }
}
