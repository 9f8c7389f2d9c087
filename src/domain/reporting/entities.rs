//! Stored plan entities as the store adapters see them.
//!
//! These are maintained by CRUD collaborators elsewhere; reporting only
//! reads them to produce [`GoalProgressRow`](super::GoalProgressRow)s.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{GoalId, NodeId, PlanId, SecretariatId};

use super::cutoff::{Cutoff, Quarter};
use super::plan::{HierarchyLevel, NodeRef};
use super::quota::{FinancialBudget, FinancialExpenditure, PhysicalAllocation};

/// A line, component, bet or initiative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HierarchyNode {
    pub id: NodeId,
    pub plan_id: PlanId,
    pub level: HierarchyLevel,
    pub parent_id: Option<NodeId>,
    pub code: String,
    pub name: String,
}

impl HierarchyNode {
    pub fn to_ref(&self) -> NodeRef {
        NodeRef {
            id: Some(self.id),
            code: Some(self.code.clone()),
            name: Some(self.name.clone()),
        }
    }
}

/// A responsible secretariat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Secretariat {
    pub id: SecretariatId,
    pub name: String,
}

/// A goal ("meta") attached to one initiative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: GoalId,
    pub plan_id: PlanId,
    pub initiative_id: Option<NodeId>,
    pub secretariat_id: Option<SecretariatId>,
    pub code: String,
    pub name: String,
    pub physical: PhysicalAllocation,
    pub budget: FinancialBudget,
}

/// One quarterly progress report against a goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    pub goal_id: GoalId,
    pub year: i32,
    pub quarter: Quarter,
    pub physical_quantity: f64,
    pub expenditure: FinancialExpenditure,
}

/// Physical and financial quantities accumulated up to a cutoff.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Accumulated {
    pub physical: f64,
    pub financial: f64,
}

impl Goal {
    /// Sums this goal's records that fall inside `cutoff`.
    pub fn accumulated_at<'a, I>(&self, records: I, cutoff: Cutoff) -> Accumulated
    where
        I: IntoIterator<Item = &'a ProgressRecord>,
    {
        records
            .into_iter()
            .filter(|r| r.goal_id == self.id && cutoff.includes(r.year, r.quarter))
            .fold(Accumulated::default(), |acc, r| Accumulated {
                physical: acc.physical + r.physical_quantity,
                financial: acc.financial + r.expenditure.total(),
            })
    }
}
