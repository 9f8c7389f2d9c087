//! PostgreSQL implementation of PlanProgressReader.
//!
//! Goals are joined to their ancestor chain with left joins so a broken
//! parent link yields null ancestors instead of dropping the goal.
//! Progress is accumulated in SQL; quotas are computed from the raw
//! allocation columns with the domain quota rules.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{GoalId, NodeId, PlanId, SecretariatId};
use crate::domain::reporting::{
    Cutoff, GoalProgressRow, GroupTotals, GroupingKey, NodeRef, PhysicalAllocation, Plan,
};
use crate::ports::{PlanProgressReader, StoreError};

const GOALS_WITH_PROGRESS_SQL: &str = r#"
    SELECT
        l.id AS line_id, l.code AS line_code, l.name AS line_name,
        c.id AS component_id, c.code AS component_code, c.name AS component_name,
        b.id AS bet_id, b.code AS bet_code, b.name AS bet_name,
        i.id AS initiative_id, i.code AS initiative_code, i.name AS initiative_name,
        g.id AS goal_id, g.code AS goal_code, g.name AS goal_name,
        g.secretariat_id, s.name AS secretariat_name,
        g.recurring,
        g.quota_year_1, g.quota_year_2, g.quota_year_3, g.quota_year_4,
        COALESCE(budget.total, 0)::float8 AS financial_quota,
        COALESCE(acc.physical, 0)::float8 AS physical_accumulated,
        COALESCE(acc.financial, 0)::float8 AS financial_accumulated
    FROM goals g
    LEFT JOIN hierarchy_nodes i ON i.id = g.initiative_id
    LEFT JOIN hierarchy_nodes b ON b.id = i.parent_id
    LEFT JOIN hierarchy_nodes c ON c.id = b.parent_id
    LEFT JOIN hierarchy_nodes l ON l.id = c.parent_id
    LEFT JOIN secretariats s ON s.id = g.secretariat_id
    LEFT JOIN LATERAL (
        SELECT SUM(gb.amount) AS total
        FROM goal_budgets gb
        WHERE gb.goal_id = g.id
    ) budget ON TRUE
    LEFT JOIN LATERAL (
        SELECT
            SUM(p.physical_quantity) AS physical,
            SUM(COALESCE(p.spent_source_1, 0) + COALESCE(p.spent_source_2, 0)
                + COALESCE(p.spent_source_3, 0) + COALESCE(p.spent_source_4, 0)
                + COALESCE(p.spent_source_5, 0) + COALESCE(p.spent_source_6, 0)) AS financial
        FROM progress_records p
        WHERE p.goal_id = g.id
          AND (p.year < $2
               OR (p.year = $2 AND CAST(SUBSTRING(p.quarter FROM 2) AS INTEGER) <= $3))
    ) acc ON TRUE
    WHERE g.plan_id = $1
      AND ($4::bigint IS NULL OR g.secretariat_id = $4)
    ORDER BY l.code NULLS FIRST, c.code NULLS FIRST, b.code NULLS FIRST,
             i.code NULLS FIRST, g.code
"#;

/// PostgreSQL implementation of PlanProgressReader.
#[derive(Clone)]
pub struct PostgresPlanProgressReader {
    pool: PgPool,
}

impl PostgresPlanProgressReader {
    /// Creates a new PostgresPlanProgressReader.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn malformed(err: sqlx::Error) -> StoreError {
    StoreError::MalformedRow(err.to_string())
}

fn node_ref(row: &PgRow, prefix: &str) -> Result<NodeRef, StoreError> {
    let id: Option<i64> = row.try_get(format!("{}_id", prefix).as_str()).map_err(malformed)?;
    Ok(NodeRef {
        id: id.map(NodeId::new),
        code: row.try_get(format!("{}_code", prefix).as_str()).map_err(malformed)?,
        name: row.try_get(format!("{}_name", prefix).as_str()).map_err(malformed)?,
    })
}

fn plan_row(row: &PgRow) -> Result<Plan, StoreError> {
    Ok(Plan {
        id: PlanId::new(row.try_get("id").map_err(malformed)?),
        name: row.try_get("name").map_err(malformed)?,
        start_year: row.try_get("start_year").map_err(malformed)?,
        end_year: row.try_get("end_year").map_err(malformed)?,
    })
}

fn goal_row(row: &PgRow) -> Result<GoalProgressRow, StoreError> {
    let physical = PhysicalAllocation::new(
        [
            row.try_get("quota_year_1").map_err(malformed)?,
            row.try_get("quota_year_2").map_err(malformed)?,
            row.try_get("quota_year_3").map_err(malformed)?,
            row.try_get("quota_year_4").map_err(malformed)?,
        ],
        row.try_get("recurring").map_err(malformed)?,
    );
    let secretariat_id: Option<i64> = row.try_get("secretariat_id").map_err(malformed)?;

    Ok(GoalProgressRow {
        line: node_ref(row, "line")?,
        component: node_ref(row, "component")?,
        bet: node_ref(row, "bet")?,
        initiative: node_ref(row, "initiative")?,
        goal_id: GoalId::new(row.try_get("goal_id").map_err(malformed)?),
        goal_code: row.try_get("goal_code").map_err(malformed)?,
        goal_name: row.try_get("goal_name").map_err(malformed)?,
        secretariat_id: secretariat_id.map(SecretariatId::new),
        secretariat_name: row.try_get("secretariat_name").map_err(malformed)?,
        physical_quota: physical.quota(),
        physical_accumulated: row.try_get("physical_accumulated").map_err(malformed)?,
        financial_quota: row.try_get("financial_quota").map_err(malformed)?,
        financial_accumulated: row.try_get("financial_accumulated").map_err(malformed)?,
    })
}

#[async_trait]
impl PlanProgressReader for PostgresPlanProgressReader {
    async fn get_plan(&self, plan_id: PlanId) -> Result<Option<Plan>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, start_year, end_year FROM plans WHERE id = $1
            "#,
        )
        .bind(plan_id.value())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(plan_row).transpose()
    }

    async fn get_goals_with_progress(
        &self,
        plan_id: PlanId,
        cutoff: Cutoff,
        secretariat_id: Option<SecretariatId>,
    ) -> Result<Vec<GoalProgressRow>, StoreError> {
        let rows = sqlx::query(GOALS_WITH_PROGRESS_SQL)
            .bind(plan_id.value())
            .bind(cutoff.year())
            .bind(i32::from(cutoff.quarter().ordinal()))
            .bind(secretariat_id.map(|id| id.value()))
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(goal_row).collect()
    }

    async fn get_group_totals(
        &self,
        plan_id: PlanId,
        cutoff: Cutoff,
        group_by: GroupingKey,
        secretariat_id: Option<SecretariatId>,
    ) -> Result<Vec<GroupTotals>, StoreError> {
        let rows = self
            .get_goals_with_progress(plan_id, cutoff, secretariat_id)
            .await?;
        Ok(GroupTotals::from_rows(&rows, group_by))
    }
}
