//! HTTP handlers for reporting and dashboard endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use shared::types::{Action, Resource};

use crate::error::AppResult;
use crate::middleware::CurrentUser;
use crate::services::report::{DashboardStats, ReportService, SalesReportQuery, SalesReportRow};
use crate::AppState;

/// Sales report over a date range with optional product/store filters
pub async fn sales_report(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Query(query): Query<SalesReportQuery>,
) -> AppResult<Json<Vec<SalesReportRow>>> {
    current_user.0.require(Resource::Report, Action::View)?;
    let service = ReportService::new(state.db);
    let report = service.sales_report(query).await?;
    Ok(Json(report))
}

/// Dashboard summary statistics
pub async fn dashboard_stats(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> AppResult<Json<DashboardStats>> {
    current_user.0.require(Resource::Report, Action::View)?;
    let service = ReportService::new(state.db);
    let stats = service.dashboard_stats().await?;
    Ok(Json(stats))
}
