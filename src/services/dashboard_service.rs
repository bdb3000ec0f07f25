// src/services/dashboard_service.rs

use std::sync::Arc;

use crate::{
    analytics::{
        format::{format_percent, format_rs_label},
        format_count,
    },
    common::error::AppError,
    models::dashboard::{
        FinancialReport, FinancialSummaryView, InventoryReport, InventorySummaryView, LowStockAlert,
        ReportsOverview, SalesReport, SalesSummaryView,
    },
    repo::ReportSource,
};

#[derive(Clone)]
pub struct DashboardService {
    source: Arc<dyn ReportSource>,
}

impl DashboardService {
    pub fn new(source: Arc<dyn ReportSource>) -> Self {
        Self { source }
    }

    /// The three reports are fetched concurrently; one failing only hides its
    /// own section.
    pub async fn reports_overview(&self) -> ReportsOverview {
        let (sales, inventory, financial) = tokio::join!(
            self.source.sales_report(),
            self.source.inventory_report(),
            self.source.financial_report(),
        );

        build_reports_overview(
            section("sales", sales),
            section("inventory", inventory),
            section("financial", financial),
        )
    }
}

fn section<T>(name: &str, result: Result<T, AppError>) -> Option<T> {
    match result {
        Ok(report) => Some(report),
        Err(e) => {
            tracing::warn!("Could not load {} report: {}", name, e);
            None
        }
    }
}

pub fn build_reports_overview(
    sales: Option<SalesReport>,
    inventory: Option<InventoryReport>,
    financial: Option<FinancialReport>,
) -> ReportsOverview {
    ReportsOverview {
        title: "Business Reports".to_string(),
        sales: sales.map(sales_view),
        inventory: inventory.map(inventory_view),
        financial: financial.map(financial_view),
    }
}

fn sales_view(report: SalesReport) -> SalesSummaryView {
    let summary = report.summary.unwrap_or_default();
    SalesSummaryView {
        total_revenue: format_rs_label(&summary.total_revenue),
        total_orders: format_count(&summary.total_orders),
        avg_order_value: format_rs_label(&summary.avg_order_value),
        growth_rate: format_percent(&summary.growth),
    }
}

fn inventory_view(report: InventoryReport) -> InventorySummaryView {
    let summary = report.inventory_report.unwrap_or_default();
    let low_stock = summary.low_stock_items.unwrap_or_default();

    InventorySummaryView {
        total_products: summary.total_products.unwrap_or(0).to_string(),
        total_value: format_rs_label(&summary.total_value),
        low_stock_count: low_stock.len(),
        alerts: low_stock
            .into_iter()
            .map(|item| LowStockAlert {
                stock_line: format!("Current: {} | Min: {}", item.current_stock, item.min_stock),
                reorder_label: format!("Reorder {}", item.reorder_quantity),
                product_name: item.product_name,
            })
            .collect(),
    }
}

fn financial_view(report: FinancialReport) -> FinancialSummaryView {
    let summary = report.summary.unwrap_or_default();
    FinancialSummaryView {
        total_income: format_rs_label(&summary.total_income),
        total_expenses: format_rs_label(&summary.total_expenses),
        net_profit: format_rs_label(&summary.net_profit),
    }
}
