//! Application handlers.
//!
//! Query handlers that orchestrate report generation over the store port.

pub mod reports;

pub use reports::{
    GetDistributionHandler, GetDistributionResult, GetGroupedDistributionHandler,
    GetGroupedDistributionQuery, GetGroupedDistributionResult, GetProgressTreeHandler,
    GetProgressTreeResult, GetRankingHandler, GetRankingQuery, GetRankingResult, ReportError,
    ReportQuery, ReportScope,
};
