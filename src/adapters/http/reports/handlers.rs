//! HTTP handlers for report endpoints.
//!
//! These handlers connect Axum routes to application layer query handlers.

use std::sync::Arc;

use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::{
    GetDistributionHandler, GetGroupedDistributionHandler, GetGroupedDistributionQuery,
    GetProgressTreeHandler, GetRankingHandler, GetRankingQuery, ReportError, ReportQuery,
};
use crate::domain::foundation::{PlanId, SecretariatId, ValidationError};
use crate::domain::reporting::GroupingKey;
use crate::ports::PlanProgressReader;

use super::dto::{
    DistributionReport, ErrorResponse, GroupedDistributionReport, ProgressTreeReport,
    RankingReport, ReportParams,
};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Report API error that implements IntoResponse.
#[derive(Debug)]
pub enum ReportApiError {
    BadRequest(String),
    NotFound(String),
    Internal,
}

impl IntoResponse for ReportApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ReportApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            ReportApiError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorResponse::not_found(msg)),
            ReportApiError::Internal => {
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal())
            }
        };
        (status, Json(error)).into_response()
    }
}

impl From<ReportError> for ReportApiError {
    fn from(error: ReportError) -> Self {
        match error {
            ReportError::Validation(err) => ReportApiError::BadRequest(err.to_string()),
            ReportError::PlanNotFound(id) => {
                ReportApiError::NotFound(format!("Plan {} not found", id))
            }
            ReportError::Unexpected(detail) => {
                tracing::error!(error = %detail, "Report generation failed");
                ReportApiError::Internal
            }
        }
    }
}

impl From<ValidationError> for ReportApiError {
    fn from(error: ValidationError) -> Self {
        ReportApiError::BadRequest(error.to_string())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing report dependencies.
#[derive(Clone)]
pub struct ReportsAppState {
    pub reader: Arc<dyn PlanProgressReader>,
}

impl ReportsAppState {
    pub fn new(reader: Arc<dyn PlanProgressReader>) -> Self {
        Self { reader }
    }

    pub fn distribution_handler(&self) -> GetDistributionHandler {
        GetDistributionHandler::new(self.reader.clone())
    }

    pub fn grouped_distribution_handler(&self) -> GetGroupedDistributionHandler {
        GetGroupedDistributionHandler::new(self.reader.clone())
    }

    pub fn progress_tree_handler(&self) -> GetProgressTreeHandler {
        GetProgressTreeHandler::new(self.reader.clone())
    }

    pub fn ranking_handler(&self) -> GetRankingHandler {
        GetRankingHandler::new(self.reader.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Parameter Parsing
// ════════════════════════════════════════════════════════════════════════════════

/// Builds the application query from path and query parameters.
///
/// Only malformed values are rejected here; missing ones are left for the
/// application layer to report.
fn report_query(plan_id: &str, params: ReportParams) -> Result<ReportQuery, ReportApiError> {
    let plan_id: PlanId = plan_id
        .parse()
        .map_err(|_| ValidationError::invalid_format("planId", "expected an integer"))?;

    let year = params
        .year
        .as_deref()
        .map(|y| y.trim().parse::<i32>())
        .transpose()
        .map_err(|_| ValidationError::invalid_format("year", "expected an integer"))?;

    let secretariat_id = params
        .secretariat_id
        .as_deref()
        .map(|s| s.parse::<SecretariatId>())
        .transpose()
        .map_err(|_| ValidationError::invalid_format("secretariatId", "expected an integer"))?;

    Ok(ReportQuery {
        plan_id: Some(plan_id),
        year,
        quarter: params.quarter,
        secretariat_id,
    })
}

async fn grouped_distribution(
    state: ReportsAppState,
    plan_id: String,
    params: ReportParams,
    group_by: GroupingKey,
) -> Result<Json<GroupedDistributionReport>, ReportApiError> {
    let query = GetGroupedDistributionQuery {
        filter: report_query(&plan_id, params)?,
        group_by,
    };
    let report = state.grouped_distribution_handler().handle(query).await?;
    Ok(Json(report))
}

async fn ranking(
    state: ReportsAppState,
    plan_id: String,
    params: ReportParams,
    group_by: GroupingKey,
) -> Result<Json<RankingReport>, ReportApiError> {
    let query = GetRankingQuery {
        filter: report_query(&plan_id, params)?,
        group_by,
    };
    let report = state.ranking_handler().handle(query).await?;
    Ok(Json(report))
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/plans/:plan_id/reports/distribution
pub async fn get_distribution(
    State(state): State<ReportsAppState>,
    Path(plan_id): Path<String>,
    Query(params): Query<ReportParams>,
) -> Result<Json<DistributionReport>, ReportApiError> {
    let query = report_query(&plan_id, params)?;
    let report = state.distribution_handler().handle(query).await?;
    Ok(Json(report))
}

/// GET /api/plans/:plan_id/reports/distribution/lines
pub async fn get_line_distribution(
    State(state): State<ReportsAppState>,
    Path(plan_id): Path<String>,
    Query(params): Query<ReportParams>,
) -> Result<Json<GroupedDistributionReport>, ReportApiError> {
    grouped_distribution(state, plan_id, params, GroupingKey::Line).await
}

/// GET /api/plans/:plan_id/reports/distribution/components
pub async fn get_component_distribution(
    State(state): State<ReportsAppState>,
    Path(plan_id): Path<String>,
    Query(params): Query<ReportParams>,
) -> Result<Json<GroupedDistributionReport>, ReportApiError> {
    grouped_distribution(state, plan_id, params, GroupingKey::Component).await
}

/// GET /api/plans/:plan_id/reports/distribution/secretariats
pub async fn get_secretariat_distribution(
    State(state): State<ReportsAppState>,
    Path(plan_id): Path<String>,
    Query(params): Query<ReportParams>,
) -> Result<Json<GroupedDistributionReport>, ReportApiError> {
    grouped_distribution(state, plan_id, params, GroupingKey::Secretariat).await
}

/// GET /api/plans/:plan_id/reports/tree
///
/// Returns the line/component/bet/initiative/goal tree with rolled-up percentages.
pub async fn get_progress_tree(
    State(state): State<ReportsAppState>,
    Path(plan_id): Path<String>,
    Query(params): Query<ReportParams>,
) -> Result<Json<ProgressTreeReport>, ReportApiError> {
    let query = report_query(&plan_id, params)?;
    let report = state.progress_tree_handler().handle(query).await?;
    Ok(Json(report))
}

/// GET /api/plans/:plan_id/reports/ranking/components
pub async fn get_component_ranking(
    State(state): State<ReportsAppState>,
    Path(plan_id): Path<String>,
    Query(params): Query<ReportParams>,
) -> Result<Json<RankingReport>, ReportApiError> {
    ranking(state, plan_id, params, GroupingKey::Component).await
}

/// GET /api/plans/:plan_id/reports/ranking/secretariats
pub async fn get_secretariat_ranking(
    State(state): State<ReportsAppState>,
    Path(plan_id): Path<String>,
    Query(params): Query<ReportParams>,
) -> Result<Json<RankingReport>, ReportApiError> {
    ranking(state, plan_id, params, GroupingKey::Secretariat).await
}
