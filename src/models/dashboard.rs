// src/models/dashboard.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::common::numeric::{
    lenient_decimal_opt, lenient_integer, lenient_integer_opt, lenient_string,
};

// =============================================================================
//  Upstream payloads. Every section is optional: a report may come back
//  partially filled and the view resolves defaults.
// =============================================================================

// 1. Sales
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesReport {
    #[serde(default)]
    pub summary: Option<SalesSummary>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesSummary {
    #[serde(default, deserialize_with = "lenient_decimal_opt")]
    pub total_revenue: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_integer_opt")]
    pub total_orders: Option<i64>,
    #[serde(default, deserialize_with = "lenient_decimal_opt")]
    pub avg_order_value: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal_opt")]
    pub growth: Option<Decimal>,
}

// 2. Inventory
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryReport {
    #[serde(default)]
    pub inventory_report: Option<InventorySummary>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventorySummary {
    #[serde(default, deserialize_with = "lenient_integer_opt")]
    pub total_products: Option<i64>,
    #[serde(default, deserialize_with = "lenient_decimal_opt")]
    pub total_value: Option<Decimal>,
    #[serde(default)]
    pub low_stock_items: Option<Vec<LowStockItem>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LowStockItem {
    #[serde(default, deserialize_with = "lenient_string")]
    pub product_name: String,
    #[serde(default, deserialize_with = "lenient_integer")]
    pub current_stock: i64,
    #[serde(default, deserialize_with = "lenient_integer")]
    pub min_stock: i64,
    #[serde(default, deserialize_with = "lenient_integer")]
    pub reorder_quantity: i64,
}

// 3. Financial
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialReport {
    #[serde(default)]
    pub summary: Option<FinancialSummary>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    #[serde(default, deserialize_with = "lenient_decimal_opt")]
    pub total_income: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal_opt")]
    pub total_expenses: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal_opt")]
    pub net_profit: Option<Decimal>,
}

// =============================================================================
//  View (what the "Business Reports" tab renders)
// =============================================================================

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportsOverview {
    #[schema(example = "Business Reports")]
    pub title: String,
    pub sales: Option<SalesSummaryView>,
    pub inventory: Option<InventorySummaryView>,
    pub financial: Option<FinancialSummaryView>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SalesSummaryView {
    #[schema(example = "Rs. 1,250,000")]
    pub total_revenue: String,
    #[schema(example = "342")]
    pub total_orders: String,
    #[schema(example = "Rs. 3,654.97")]
    pub avg_order_value: String,
    #[schema(example = "12.5%")]
    pub growth_rate: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventorySummaryView {
    #[schema(example = "48")]
    pub total_products: String,
    #[schema(example = "Rs. 845,000")]
    pub total_value: String,
    pub low_stock_count: usize,
    pub alerts: Vec<LowStockAlert>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LowStockAlert {
    #[schema(example = "Gypsum Board 12mm")]
    pub product_name: String,
    #[schema(example = "Current: 4 | Min: 10")]
    pub stock_line: String,
    #[schema(example = "Reorder 25")]
    pub reorder_label: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummaryView {
    #[schema(example = "Rs. 1,400,000")]
    pub total_income: String,
    #[schema(example = "Rs. 950,000")]
    pub total_expenses: String,
    #[schema(example = "Rs. 450,000")]
    pub net_profit: String,
}
