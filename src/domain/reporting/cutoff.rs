//! Report cutoff - the (year, quarter) bound on counted progress records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Quarter of a reporting year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Quarter {
    T1,
    T2,
    T3,
    T4,
}

impl Quarter {
    /// Ordinal position within the year (1-4).
    pub fn ordinal(&self) -> u8 {
        match self {
            Quarter::T1 => 1,
            Quarter::T2 => 2,
            Quarter::T3 => 3,
            Quarter::T4 => 4,
        }
    }

    /// Quarter for an ordinal in 1..=4.
    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            1 => Some(Quarter::T1),
            2 => Some(Quarter::T2),
            3 => Some(Quarter::T3),
            4 => Some(Quarter::T4),
            _ => None,
        }
    }

    /// Parses a `T1`..`T4` label, ignoring case and surrounding whitespace.
    pub fn parse_label(label: &str) -> Option<Self> {
        let label = label.trim().to_ascii_uppercase();
        label
            .strip_prefix('T')
            .filter(|digit| digit.len() == 1)
            .and_then(|digit| digit.parse::<u8>().ok())
            .and_then(Quarter::from_ordinal)
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.ordinal())
    }
}


/// Upper bound on which progress records count toward a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cutoff {
    year: i32,
    quarter: Quarter,
}

impl Cutoff {
    pub fn new(year: i32, quarter: Quarter) -> Self {
        Self { year, quarter }
    }

    /// Resolves a requested (year, quarter label) pair.
    ///
    /// A missing or unrecognized label resolves to T4 (end of year). The
    /// fallback is logged because it usually means the caller sent a typo.
    pub fn resolve(year: i32, label: Option<&str>) -> Self {
        let quarter = match label.map(|l| (l, Quarter::parse_label(l))) {
            Some((_, Some(quarter))) => quarter,
            Some((raw, None)) => {
                tracing::warn!(year, label = raw, "Unrecognized quarter label, defaulting to T4");
                Quarter::T4
            }
            None => {
                tracing::warn!(year, "Missing quarter label, defaulting to T4");
                Quarter::T4
            }
        };
        Self::new(year, quarter)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn quarter(&self) -> Quarter {
        self.quarter
    }

    /// Whether a record reported in `year`/`quarter` falls inside this cutoff.
    pub fn includes(&self, year: i32, quarter: Quarter) -> bool {
        year < self.year || (year == self.year && quarter.ordinal() <= self.quarter.ordinal())
    }
}

impl fmt::Display for Cutoff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.year, self.quarter)
    }
}
