// src/routes.rs

use axum::{routing::get, Router};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{config::AppState, docs::ApiDoc, handlers};

pub fn build_router(app_state: AppState) -> Router {
    let report_routes = Router::new()
        .route("/customer-purchases", get(handlers::reports::get_customer_purchases))
        .route(
            "/customer-purchases/{customer_id}",
            get(handlers::reports::get_customer_snapshot),
        )
        .route("/top-customers", get(handlers::reports::get_top_customers))
        .route("/top-products", get(handlers::reports::get_top_products));

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/reports", report_routes)
        .route("/api/dashboard/reports", get(handlers::dashboard::get_reports_overview))
        .route("/api/pricing/{tier}", get(handlers::marketing::get_pricing_detail))
        .route("/api/services/{slug}", get(handlers::marketing::get_service_detail))
        .with_state(app_state)
}
