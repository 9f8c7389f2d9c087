//! Grouping keys shared by distribution and ranking reports.

use serde::{Deserialize, Serialize};

use super::plan::GoalProgressRow;

/// Dimension goals are grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupingKey {
    Line,
    Component,
    Secretariat,
}

/// Identity of one group as read off a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupRef {
    pub id: Option<i64>,
    pub name: Option<String>,
}

impl GroupingKey {
    /// The group a row belongs to under this key.
    pub fn group_of(&self, row: &GoalProgressRow) -> GroupRef {
        match self {
            GroupingKey::Line => GroupRef {
                id: row.line.id.map(|id| id.value()),
                name: row.line.name.clone(),
            },
            GroupingKey::Component => GroupRef {
                id: row.component.id.map(|id| id.value()),
                name: row.component.name.clone(),
            },
            GroupingKey::Secretariat => GroupRef {
                id: row.secretariat_id.map(|id| id.value()),
                name: row.secretariat_name.clone(),
            },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GroupingKey::Line => "line",
            GroupingKey::Component => "component",
            GroupingKey::Secretariat => "secretariat",
        }
    }

    /// Response key holding the groups of a grouped report.
    pub fn collection_key(&self) -> &'static str {
        match self {
            GroupingKey::Line => "lines",
            GroupingKey::Component => "components",
            GroupingKey::Secretariat => "secretariats",
        }
    }
}
