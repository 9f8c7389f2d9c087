//! Report view models returned by the report queries.

use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;

use super::cutoff::Cutoff;
use super::distribution::{BandCounts, ClassifiedGoal, GroupDistribution};
use super::grouping::GroupingKey;
use super::plan::Plan;
use super::ranking::RankingEntry;
use super::tree::TreeNode;

/// Band distribution over every goal of a plan.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionReport {
    pub plan: Plan,
    pub cutoff: Cutoff,
    pub goals: Vec<ClassifiedGoal>,
    pub counts: BandCounts,
}

/// Band distribution per line, component or secretariat.
///
/// Serialized with the groups under `lines`, `components` or `secretariats`
/// depending on `grouped_by`.
#[derive(Debug, Clone)]
pub struct GroupedDistributionReport {
    pub plan: Plan,
    pub cutoff: Cutoff,
    pub grouped_by: GroupingKey,
    pub groups: Vec<GroupDistribution>,
}

impl Serialize for GroupedDistributionReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut report = serializer.serialize_struct("GroupedDistributionReport", 3)?;
        report.serialize_field("plan", &self.plan)?;
        report.serialize_field("cutoff", &self.cutoff)?;
        report.serialize_field(self.grouped_by.collection_key(), &self.groups)?;
        report.end()
    }
}

/// Nested hierarchy with rolled-up completion.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressTreeReport {
    pub plan: Plan,
    pub cutoff: Cutoff,
    pub tree: Vec<TreeNode>,
}

/// Groups sorted by weighted completion.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingReport {
    pub plan: Plan,
    pub cutoff: Cutoff,
    pub grouped_by: GroupingKey,
    pub ranking: Vec<RankingEntry>,
}
