//! Distribution of goals across completion bands.
//!
//! One classifier serves every variant; the variants differ only in how
//! rows are partitioned before classification (see [`GroupingKey`]).

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::foundation::Percentage;

use super::grouping::GroupingKey;
use super::plan::GoalProgressRow;
use super::progress::GoalProgress;

/// Upper bound (exclusive) of the `low` band.
pub const LOW_BAND_LIMIT: f64 = 26.25;

/// Upper bound (exclusive) of the `mid` band.
pub const MID_BAND_LIMIT: f64 = 43.75;

/// Completion band of a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressBand {
    /// Exactly 0%
    None,
    /// Below 26.25%
    Low,
    /// Below 43.75%
    Mid,
    /// Below 100%
    High,
    /// 100%
    Complete,
}

impl ProgressBand {
    /// Classifies a percentage. Thresholds are checked in order, first match wins.
    pub fn classify(percentage: Percentage) -> Self {
        let p = percentage.value();
        if p == 0.0 {
            ProgressBand::None
        } else if p < LOW_BAND_LIMIT {
            ProgressBand::Low
        } else if p < MID_BAND_LIMIT {
            ProgressBand::Mid
        } else if p < 100.0 {
            ProgressBand::High
        } else {
            ProgressBand::Complete
        }
    }

    pub fn all() -> &'static [ProgressBand] {
        &[
            ProgressBand::None,
            ProgressBand::Low,
            ProgressBand::Mid,
            ProgressBand::High,
            ProgressBand::Complete,
        ]
    }
}

/// Number of goals per band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BandCounts {
    pub none: usize,
    pub low: usize,
    pub mid: usize,
    pub high: usize,
    pub complete: usize,
}

impl BandCounts {
    pub fn record(&mut self, band: ProgressBand) {
        match band {
            ProgressBand::None => self.none += 1,
            ProgressBand::Low => self.low += 1,
            ProgressBand::Mid => self.mid += 1,
            ProgressBand::High => self.high += 1,
            ProgressBand::Complete => self.complete += 1,
        }
    }

    pub fn get(&self, band: ProgressBand) -> usize {
        match band {
            ProgressBand::None => self.none,
            ProgressBand::Low => self.low,
            ProgressBand::Mid => self.mid,
            ProgressBand::High => self.high,
            ProgressBand::Complete => self.complete,
        }
    }

    pub fn total(&self) -> usize {
        self.none + self.low + self.mid + self.high + self.complete
    }
}

/// A goal with its completion and band.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedGoal {
    #[serde(flatten)]
    pub progress: GoalProgress,
    /// The physical percentage the band was classified from.
    pub percentage: Percentage,
    pub band: ProgressBand,
}

impl ClassifiedGoal {
    pub fn new(progress: GoalProgress) -> Self {
        let percentage = progress.percentage();
        Self {
            progress,
            percentage,
            band: ProgressBand::classify(percentage),
        }
    }
}

/// Classified goals of one group plus their band counts.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Distribution {
    pub goals: Vec<ClassifiedGoal>,
    pub counts: BandCounts,
}

impl Distribution {
    pub fn push(&mut self, goal: GoalProgress) {
        let classified = ClassifiedGoal::new(goal);
        self.counts.record(classified.band);
        self.goals.push(classified);
    }
}

impl FromIterator<GoalProgress> for Distribution {
    fn from_iter<I: IntoIterator<Item = GoalProgress>>(iter: I) -> Self {
        let mut distribution = Distribution::default();
        for goal in iter {
            distribution.push(goal);
        }
        distribution
    }
}

/// Distribution of one group (line, component or secretariat).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupDistribution {
    pub id: Option<i64>,
    pub name: Option<String>,
    #[serde(flatten)]
    pub distribution: Distribution,
}

/// Classifies every row as a single group.
pub fn distribute(rows: &[GoalProgressRow]) -> Distribution {
    rows.iter().map(GoalProgress::from_row).collect()
}

/// Partitions rows by `key` and classifies each group.
///
/// Groups appear in the order their first row appears; the group name is
/// taken from that first row.
pub fn distribute_by(rows: &[GoalProgressRow], key: GroupingKey) -> Vec<GroupDistribution> {
    let mut groups: Vec<GroupDistribution> = Vec::new();
    let mut index: HashMap<Option<i64>, usize> = HashMap::new();

    for row in rows {
        let group = key.group_of(row);
        let position = *index.entry(group.id).or_insert_with(|| {
            groups.push(GroupDistribution {
                id: group.id,
                name: group.name.clone(),
                distribution: Distribution::default(),
            });
            groups.len() - 1
        });
        groups[position].distribution.push(GoalProgress::from_row(row));
    }

    groups
}

#[cfg(test)]
#[path = "distribution_test.rs"]
mod distribution_test;
