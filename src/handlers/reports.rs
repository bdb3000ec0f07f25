// src/handlers/reports.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{Datelike, Utc};
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::{
    analytics::SortKey,
    common::error::AppError,
    config::AppState,
    models::report_views::{CustomerPurchasesView, CustomerSnapshot, ReportPeriod, TopCustomersView, TopProductsView},
};

// =============================================================================
//  Query parameters
// =============================================================================

#[derive(Debug, Default, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PeriodQuery {
    /// 1-12; defaults to the current month.
    #[validate(range(min = 1, max = 12, message = "month must be between 1 and 12"))]
    #[param(example = 1)]
    pub month: Option<u32>,

    /// Defaults to the current year.
    #[validate(range(min = 2000, max = 2100, message = "year must be between 2000 and 2100"))]
    #[param(example = 2025)]
    pub year: Option<i32>,
}

impl PeriodQuery {
    pub fn period(&self) -> ReportPeriod {
        let today = Utc::now().date_naive();
        ReportPeriod::new(
            self.month.unwrap_or_else(|| today.month()),
            self.year.unwrap_or_else(|| today.year()),
        )
    }
}

#[derive(Debug, Default, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct CustomerPurchasesQuery {
    #[validate(range(min = 1, max = 12, message = "month must be between 1 and 12"))]
    pub month: Option<u32>,

    #[validate(range(min = 2000, max = 2100, message = "year must be between 2000 and 2100"))]
    pub year: Option<i32>,

    /// Matches customer name (any case) or phone number.
    #[validate(length(max = 100, message = "search is too long"))]
    #[param(example = "ali")]
    pub search: Option<String>,

    /// `value`, `orders` or `balance`. Unknown keys keep the API order.
    #[param(example = "value")]
    pub sort_by: Option<String>,
}

impl CustomerPurchasesQuery {
    fn period(&self) -> ReportPeriod {
        PeriodQuery {
            month: self.month,
            year: self.year,
        }
        .period()
    }
}

// =============================================================================
//  Handlers
// =============================================================================

// GET /api/reports/customer-purchases
#[utoipa::path(
    get,
    path = "/api/reports/customer-purchases",
    tag = "Reports",
    params(CustomerPurchasesQuery),
    responses(
        (status = 200, description = "Customer purchase breakdown for the month", body = CustomerPurchasesView),
        (status = 400, description = "Invalid query parameters"),
        (status = 502, description = "Reporting API unavailable")
    )
)]
pub async fn get_customer_purchases(
    State(app_state): State<AppState>,
    Query(query): Query<CustomerPurchasesQuery>,
) -> Result<impl IntoResponse, AppError> {
    query.validate()?;

    let view = app_state
        .report_service
        .customer_purchases(
            query.period(),
            query.search.as_deref().unwrap_or(""),
            SortKey::resolve(query.sort_by.as_deref()),
        )
        .await?;

    Ok((StatusCode::OK, Json(view)))
}

// GET /api/reports/customer-purchases/{customer_id}
#[utoipa::path(
    get,
    path = "/api/reports/customer-purchases/{customer_id}",
    tag = "Reports",
    params(
        ("customer_id" = String, Path, description = "Customer id as sent by the reporting API"),
        PeriodQuery
    ),
    responses(
        (status = 200, description = "Purchase summary of one customer", body = CustomerSnapshot),
        (status = 404, description = "Customer has no purchases in the period")
    )
)]
pub async fn get_customer_snapshot(
    State(app_state): State<AppState>,
    Path(customer_id): Path<String>,
    Query(query): Query<PeriodQuery>,
) -> Result<impl IntoResponse, AppError> {
    query.validate()?;

    let snapshot = app_state
        .report_service
        .customer_snapshot(query.period(), &customer_id)
        .await?;

    Ok((StatusCode::OK, Json(snapshot)))
}

// GET /api/reports/top-customers
#[utoipa::path(
    get,
    path = "/api/reports/top-customers",
    tag = "Reports",
    params(PeriodQuery),
    responses(
        (status = 200, description = "Best customers by purchase value", body = TopCustomersView),
        (status = 400, description = "Invalid query parameters")
    )
)]
pub async fn get_top_customers(
    State(app_state): State<AppState>,
    Query(query): Query<PeriodQuery>,
) -> Result<impl IntoResponse, AppError> {
    query.validate()?;

    let view = app_state.report_service.top_customers(query.period()).await?;

    Ok((StatusCode::OK, Json(view)))
}

// GET /api/reports/top-products
#[utoipa::path(
    get,
    path = "/api/reports/top-products",
    tag = "Reports",
    params(PeriodQuery),
    responses(
        (status = 200, description = "Best performing products by revenue", body = TopProductsView),
        (status = 400, description = "Invalid query parameters")
    )
)]
pub async fn get_top_products(
    State(app_state): State<AppState>,
    Query(query): Query<PeriodQuery>,
) -> Result<impl IntoResponse, AppError> {
    query.validate()?;

    let view = app_state.report_service.top_products(query.period()).await?;

    Ok((StatusCode::OK, Json(view)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_period_wins_over_today() {
        let query = PeriodQuery {
            month: Some(3),
            year: Some(2024),
        };
        assert_eq!(query.period(), ReportPeriod::new(3, 2024));
    }

    #[test]
    fn out_of_range_month_is_rejected() {
        let query = PeriodQuery {
            month: Some(13),
            year: None,
        };
        assert!(query.validate().is_err());
        assert!(PeriodQuery::default().validate().is_ok());
    }

    #[test]
    fn long_search_is_rejected() {
        let query = CustomerPurchasesQuery {
            search: Some("x".repeat(101)),
            ..Default::default()
        };
        assert!(query.validate().is_err());
    }
}
