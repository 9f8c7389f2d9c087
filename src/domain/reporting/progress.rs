//! Per-goal completion, computed independently for physical and financial execution.

use serde::Serialize;

use crate::domain::foundation::{GoalId, Percentage, SecretariatId};

use super::plan::GoalProgressRow;

/// Completion of `accumulated` against `quota`, clamped to 100 and rounded to two decimals.
pub fn completion(quota: f64, accumulated: f64) -> Percentage {
    Percentage::of(accumulated, quota)
}

/// A goal annotated with its physical and financial completion.
///
/// The two percentages are reported side by side and never combined.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub goal_id: GoalId,
    pub code: String,
    pub name: String,
    pub secretariat_id: Option<SecretariatId>,
    pub secretariat_name: Option<String>,
    pub physical_quota: f64,
    pub physical_accumulated: f64,
    pub physical_percentage: Percentage,
    pub financial_quota: f64,
    pub financial_accumulated: f64,
    pub financial_percentage: Percentage,
}

impl GoalProgress {
    pub fn from_row(row: &GoalProgressRow) -> Self {
        Self {
            goal_id: row.goal_id,
            code: row.goal_code.clone(),
            name: row.goal_name.clone(),
            secretariat_id: row.secretariat_id,
            secretariat_name: row.secretariat_name.clone(),
            physical_quota: row.physical_quota,
            physical_accumulated: row.physical_accumulated,
            physical_percentage: completion(row.physical_quota, row.physical_accumulated),
            financial_quota: row.financial_quota,
            financial_accumulated: row.financial_accumulated,
            financial_percentage: completion(row.financial_quota, row.financial_accumulated),
        }
    }

    /// The value used for bands and tree rollups.
    pub fn percentage(&self) -> Percentage {
        self.physical_percentage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::reporting::plan::NodeRef;

    fn row(physical: (f64, f64), financial: (f64, f64)) -> GoalProgressRow {
        GoalProgressRow {
            line: NodeRef::new(1, "1", "Line"),
            component: NodeRef::new(2, "1.1", "Component"),
            bet: NodeRef::new(3, "1.1.1", "Bet"),
            initiative: NodeRef::new(4, "1.1.1.1", "Initiative"),
            goal_id: GoalId::new(10),
            goal_code: "M-10".to_string(),
            goal_name: "Classrooms built".to_string(),
            secretariat_id: Some(SecretariatId::new(5)),
            secretariat_name: Some("Education".to_string()),
            physical_quota: physical.0,
            physical_accumulated: physical.1,
            financial_quota: financial.0,
            financial_accumulated: financial.1,
        }
    }

    #[test]
    fn physical_and_financial_are_independent() {
        let progress = GoalProgress::from_row(&row((50.0, 25.0), (1000.0, 900.0)));
        assert_eq!(progress.physical_percentage.value(), 50.0);
        assert_eq!(progress.financial_percentage.value(), 90.0);
        assert_eq!(progress.percentage(), progress.physical_percentage);
    }

    #[test]
    fn zero_quota_never_produces_nan() {
        let progress = GoalProgress::from_row(&row((0.0, 12.0), (0.0, 0.0)));
        assert_eq!(progress.physical_percentage, Percentage::ZERO);
        assert_eq!(progress.financial_percentage, Percentage::ZERO);
    }

    #[test]
    fn completion_clamps_at_100() {
        assert_eq!(completion(10.0, 25.0), Percentage::HUNDRED);
    }

    #[test]
    fn goal_progress_serializes_camel_case() {
        let json = serde_json::to_value(GoalProgress::from_row(&row((4.0, 1.0), (0.0, 0.0)))).unwrap();
        assert_eq!(json["physicalPercentage"], 25.0);
        assert_eq!(json["secretariatName"], "Education");
    }
}
