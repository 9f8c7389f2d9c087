//! Ranking of groups by weighted completion.
//!
//! A group's percentage is computed from its summed raw quantities, so a
//! large goal weighs more than a small one. This differs on purpose from
//! the per-goal values used by distributions and the unweighted tree rollup.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Percentage;

use super::grouping::GroupingKey;
use super::plan::GoalProgressRow;

/// Pre-summed physical quantities of one group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupTotals {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub quota_sum: f64,
    pub accumulated_sum: f64,
    pub goal_count: usize,
}

impl GroupTotals {
    /// Weighted completion: summed accumulated over summed quota.
    pub fn percentage(&self) -> Percentage {
        Percentage::of(self.accumulated_sum, self.quota_sum)
    }

    /// Sums goal rows per group, in first-seen group order.
    pub fn from_rows(rows: &[GoalProgressRow], key: GroupingKey) -> Vec<GroupTotals> {
        let mut totals: Vec<GroupTotals> = Vec::new();
        let mut index: HashMap<Option<i64>, usize> = HashMap::new();

        for row in rows {
            let group = key.group_of(row);
            let position = *index.entry(group.id).or_insert_with(|| {
                totals.push(GroupTotals {
                    id: group.id,
                    name: group.name.clone(),
                    quota_sum: 0.0,
                    accumulated_sum: 0.0,
                    goal_count: 0,
                });
                totals.len() - 1
            });
            let entry = &mut totals[position];
            entry.quota_sum += row.physical_quota;
            entry.accumulated_sum += row.physical_accumulated;
            entry.goal_count += 1;
        }

        totals
    }
}

/// One ranked group.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingEntry {
    /// 1-based rank.
    pub position: usize,
    pub id: Option<i64>,
    pub name: Option<String>,
    pub quota_sum: f64,
    pub accumulated_sum: f64,
    pub goal_count: usize,
    pub percentage: Percentage,
}

/// Orders by percentage descending, then by ascending id with id-less groups last.
fn compare(a: &(Percentage, GroupTotals), b: &(Percentage, GroupTotals)) -> Ordering {
    b.0.partial_cmp(&a.0)
        .unwrap_or(Ordering::Equal)
        .then_with(|| (a.1.id.is_none(), a.1.id).cmp(&(b.1.id.is_none(), b.1.id)))
}

/// Ranks groups by weighted completion.
pub fn rank(totals: Vec<GroupTotals>) -> Vec<RankingEntry> {
    let mut scored: Vec<(Percentage, GroupTotals)> =
        totals.into_iter().map(|t| (t.percentage(), t)).collect();
    scored.sort_by(compare);

    scored
        .into_iter()
        .enumerate()
        .map(|(i, (percentage, totals))| RankingEntry {
            position: i + 1,
            id: totals.id,
            name: totals.name,
            quota_sum: totals.quota_sum,
            accumulated_sum: totals.accumulated_sum,
            goal_count: totals.goal_count,
            percentage,
        })
        .collect()
}
