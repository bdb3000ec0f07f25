// src/handlers/dashboard.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{config::AppState, models::dashboard::ReportsOverview};

// GET /api/dashboard/reports
#[utoipa::path(
    get,
    path = "/api/dashboard/reports",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Sales, inventory and financial summaries. Sections whose report could not be loaded are null.", body = ReportsOverview)
    )
)]
pub async fn get_reports_overview(State(app_state): State<AppState>) -> impl IntoResponse {
    let overview = app_state.dashboard_service.reports_overview().await;

    (StatusCode::OK, Json(overview))
}
