//! Report query handlers.
//!
//! Read-only handlers producing the seven plan progress reports:
//! global, by-line, by-component and by-secretariat distributions, the
//! progress tree, and the by-component and by-secretariat rankings.

mod errors;
mod get_distribution;
mod get_grouped_distribution;
mod get_progress_tree;
mod get_ranking;
mod report_query;

#[cfg(test)]
pub(crate) mod test_support;

pub use errors::ReportError;
pub use get_distribution::{GetDistributionHandler, GetDistributionResult};
pub use get_grouped_distribution::{
    GetGroupedDistributionHandler, GetGroupedDistributionQuery, GetGroupedDistributionResult,
};
pub use get_progress_tree::{GetProgressTreeHandler, GetProgressTreeResult};
pub use get_ranking::{GetRankingHandler, GetRankingQuery, GetRankingResult};
pub use report_query::{ReportQuery, ReportScope};
