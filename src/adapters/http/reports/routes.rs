//! HTTP routes for report endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{
    get_component_distribution, get_component_ranking, get_distribution, get_line_distribution,
    get_progress_tree, get_secretariat_distribution, get_secretariat_ranking, ReportsAppState,
};

/// Creates the report router with all routes.
pub fn report_routes(state: ReportsAppState) -> Router {
    Router::new()
        .route("/api/plans/:plan_id/reports/distribution", get(get_distribution))
        .route("/api/plans/:plan_id/reports/distribution/lines", get(get_line_distribution))
        .route(
            "/api/plans/:plan_id/reports/distribution/components",
            get(get_component_distribution),
        )
        .route(
            "/api/plans/:plan_id/reports/distribution/secretariats",
            get(get_secretariat_distribution),
        )
        .route("/api/plans/:plan_id/reports/tree", get(get_progress_tree))
        .route("/api/plans/:plan_id/reports/ranking/components", get(get_component_ranking))
        .route(
            "/api/plans/:plan_id/reports/ranking/secretariats",
            get(get_secretariat_ranking),
        )
        .with_state(state)
}
