//! Plan metadata and the flat, pre-joined goal rows reports are built from.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{GoalId, NodeId, PlanId, SecretariatId};

/// A multi-year development plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: PlanId,
    pub name: String,
    pub start_year: i32,
    pub end_year: i32,
}

/// The four strategic levels above a goal, outermost first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HierarchyLevel {
    Line,
    Component,
    Bet,
    Initiative,
}

impl HierarchyLevel {
    /// Returns all levels from the root down.
    pub fn all() -> &'static [HierarchyLevel] {
        &[
            HierarchyLevel::Line,
            HierarchyLevel::Component,
            HierarchyLevel::Bet,
            HierarchyLevel::Initiative,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HierarchyLevel::Line => "line",
            HierarchyLevel::Component => "component",
            HierarchyLevel::Bet => "bet",
            HierarchyLevel::Initiative => "initiative",
        }
    }
}

/// Reference to an ancestor node as carried on a flat row.
///
/// Every field is optional: a broken parent chain leaves the upper
/// ancestors empty instead of dropping the goal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeRef {
    pub id: Option<NodeId>,
    pub code: Option<String>,
    pub name: Option<String>,
}

impl NodeRef {
    pub fn new(id: i64, code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Some(NodeId::new(id)),
            code: Some(code.into()),
            name: Some(name.into()),
        }
    }

    /// A placeholder for a missing ancestor.
    pub fn orphan() -> Self {
        Self::default()
    }
}

/// One goal joined with its four ancestors and its progress at a cutoff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgressRow {
    pub line: NodeRef,
    pub component: NodeRef,
    pub bet: NodeRef,
    pub initiative: NodeRef,
    pub goal_id: GoalId,
    pub goal_code: String,
    pub goal_name: String,
    pub secretariat_id: Option<SecretariatId>,
    pub secretariat_name: Option<String>,
    /// Physical quota over the plan horizon.
    pub physical_quota: f64,
    /// Physical quantity accumulated up to the cutoff.
    pub physical_accumulated: f64,
    pub financial_quota: f64,
    pub financial_accumulated: f64,
}

impl GoalProgressRow {
    /// Ancestor reference at the given level.
    pub fn ancestor(&self, level: HierarchyLevel) -> &NodeRef {
        match level {
            HierarchyLevel::Line => &self.line,
            HierarchyLevel::Component => &self.component,
            HierarchyLevel::Bet => &self.bet,
            HierarchyLevel::Initiative => &self.initiative,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ancestors_follow_level_order() {
        let row = GoalProgressRow {
            line: NodeRef::new(1, "1", "Line"),
            component: NodeRef::new(2, "1.1", "Component"),
            bet: NodeRef::new(3, "1.1.1", "Bet"),
            initiative: NodeRef::orphan(),
            goal_id: GoalId::new(9),
            goal_code: "M9".to_string(),
            goal_name: "Goal".to_string(),
            secretariat_id: None,
            secretariat_name: None,
            physical_quota: 0.0,
            physical_accumulated: 0.0,
            financial_quota: 0.0,
            financial_accumulated: 0.0,
        };

        let ids: Vec<_> = HierarchyLevel::all()
            .iter()
            .map(|level| row.ancestor(*level).id.map(|id| id.value()))
            .collect();
        assert_eq!(ids, vec![Some(1), Some(2), Some(3), None]);
    }

    #[test]
    fn orphan_ref_has_no_fields() {
        let orphan = NodeRef::orphan();
        assert!(orphan.id.is_none());
        assert!(orphan.code.is_none());
        assert!(orphan.name.is_none());
    }

    #[test]
    fn level_serializes_snake_case() {
        let json = serde_json::to_string(&HierarchyLevel::Initiative).unwrap();
        assert_eq!(json, "\"initiative\"");
    }
}
