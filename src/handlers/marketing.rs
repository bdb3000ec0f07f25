// src/handlers/marketing.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    common::error::AppError,
    config::AppState,
    models::marketing::{PricingDetailView, ServiceDetailView},
};

// GET /api/pricing/{tier}
#[utoipa::path(
    get,
    path = "/api/pricing/{tier}",
    tag = "Marketing",
    params(
        ("tier" = String, Path, description = "basic, medium or high")
    ),
    responses(
        (status = 200, description = "Pricing package detail", body = PricingDetailView),
        (status = 404, description = "Package not found")
    )
)]
pub async fn get_pricing_detail(
    State(app_state): State<AppState>,
    Path(tier): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let view = app_state.catalog_service.pricing_detail(&tier).await?;

    Ok((StatusCode::OK, Json(view)))
}

// GET /api/services/{slug}
#[utoipa::path(
    get,
    path = "/api/services/{slug}",
    tag = "Marketing",
    params(
        ("slug" = String, Path, description = "Service slug, e.g. gypsum-false-ceiling")
    ),
    responses(
        (status = 200, description = "Service detail page", body = ServiceDetailView),
        (status = 404, description = "Service not found")
    )
)]
pub async fn get_service_detail(
    State(app_state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let view = app_state.catalog_service.service_detail(&slug)?;

    Ok((StatusCode::OK, Json(view)))
}
