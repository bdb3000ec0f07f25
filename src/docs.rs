// src/docs.rs

use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Reports ---
        handlers::reports::get_customer_purchases,
        handlers::reports::get_customer_snapshot,
        handlers::reports::get_top_customers,
        handlers::reports::get_top_products,

        // --- Dashboard ---
        handlers::dashboard::get_reports_overview,

        // --- Marketing ---
        handlers::marketing::get_pricing_detail,
        handlers::marketing::get_service_detail,
    ),
    components(
        schemas(
            // --- Reports ---
            models::reports::CustomerType,
            models::report_views::ReportPeriod,
            models::report_views::EmptyState,
            models::report_views::SummaryCard,
            models::report_views::LeaderCard,
            models::report_views::ChartBar,
            models::report_views::ChartSeries,
            models::report_views::Podium,
            models::report_views::CustomerPurchasesView,
            models::report_views::PurchaseRow,
            models::report_views::CustomerSnapshot,
            models::report_views::TopCustomersView,
            models::report_views::TopCustomerRow,
            models::report_views::TopProductsView,
            models::report_views::TopProductRow,

            // --- Dashboard ---
            models::dashboard::ReportsOverview,
            models::dashboard::SalesSummaryView,
            models::dashboard::InventorySummaryView,
            models::dashboard::LowStockAlert,
            models::dashboard::FinancialSummaryView,

            // --- Marketing ---
            models::marketing::TierKey,
            models::marketing::GalleryImage,
            models::marketing::PricingDetailView,
            models::marketing::ServiceDetailView,
        )
    ),
    tags(
        (name = "Reports", description = "Monthly customer and product reports"),
        (name = "Dashboard", description = "Sales, inventory and financial overview"),
        (name = "Marketing", description = "Pricing packages and service pages")
    )
)]
pub struct ApiDoc;
