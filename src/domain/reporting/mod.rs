//! Plan progress reporting - the aggregation engine behind every report.
//!
//! # Module Organization
//!
//! - `cutoff` - (year, quarter) bound on counted progress records
//! - `quota` - physical and financial goal targets
//! - `entities` - stored plan entities read by the store adapters
//! - `progress` - per-goal completion percentages
//! - `tree` - nested hierarchy with unweighted rollups
//! - `distribution` - completion bands and per-group counts
//! - `ranking` - weighted group completion, sorted

pub mod cutoff;
pub mod distribution;
pub mod entities;
pub mod grouping;
pub mod plan;
pub mod progress;
pub mod quota;
pub mod ranking;
pub mod reports;
pub mod tree;

pub use cutoff::{Cutoff, Quarter};
pub use distribution::{
    distribute, distribute_by, BandCounts, ClassifiedGoal, Distribution, GroupDistribution,
    ProgressBand,
};
pub use entities::{Accumulated, Goal, HierarchyNode, ProgressRecord, Secretariat};
pub use grouping::{GroupRef, GroupingKey};
pub use plan::{GoalProgressRow, HierarchyLevel, NodeRef, Plan};
pub use progress::{completion, GoalProgress};
pub use quota::{FinancialBudget, FinancialExpenditure, PhysicalAllocation, FUNDING_SOURCES, PLAN_YEARS};
pub use ranking::{rank, GroupTotals, RankingEntry};
pub use reports::{DistributionReport, GroupedDistributionReport, ProgressTreeReport, RankingReport};
pub use tree::{build_tree, NodeKind, ProgressTreeBuilder, TreeNode};
