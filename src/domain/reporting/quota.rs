//! Goal quotas - physical and financial targets across the plan horizon.

use serde::{Deserialize, Serialize};

/// Number of yearly allocations in a plan horizon.
pub const PLAN_YEARS: usize = 4;

/// Number of funding-source columns tracked per budget year and per expenditure.
pub const FUNDING_SOURCES: usize = 6;

/// Physical target of a goal, allocated per plan year.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicalAllocation {
    /// Allocation for each plan year; `None` when the year has no target.
    pub yearly: [Option<f64>; PLAN_YEARS],
    /// Recurring goals restate the same target every year.
    pub recurring: bool,
}

impl PhysicalAllocation {
    pub fn new(yearly: [Option<f64>; PLAN_YEARS], recurring: bool) -> Self {
        Self { yearly, recurring }
    }

    /// Total physical quota.
    ///
    /// Sum of the present allocations, or their average for recurring goals.
    pub fn quota(&self) -> f64 {
        let present: Vec<f64> = self.yearly.iter().flatten().copied().collect();
        let sum: f64 = present.iter().sum();
        if self.recurring {
            if present.is_empty() {
                0.0
            } else {
                sum / present.len() as f64
            }
        } else {
            sum
        }
    }
}

/// Budget grid of a goal: one row per plan year, one column per funding source.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FinancialBudget(pub [[f64; FUNDING_SOURCES]; PLAN_YEARS]);

impl FinancialBudget {
    /// Total financial quota across every year and source.
    pub fn quota(&self) -> f64 {
        self.0.iter().flat_map(|year| year.iter()).sum()
    }
}

/// Expenditure reported by one progress record, per funding source.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FinancialExpenditure(pub [f64; FUNDING_SOURCES]);

impl FinancialExpenditure {
    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }
}
