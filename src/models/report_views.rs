// src/models/report_views.rs

use chrono::Month;
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::reports::CustomerType;

// --- Period ---

/// Month/year a report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportPeriod {
    #[schema(example = 1)]
    pub month: u32,
    #[schema(example = 2025)]
    pub year: i32,
}

impl ReportPeriod {
    pub fn new(month: u32, year: i32) -> Self {
        Self { month, year }
    }

    /// `"January"`, or an empty string for a month outside 1-12.
    pub fn month_label(&self) -> &'static str {
        u8::try_from(self.month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .map(|m| m.name())
            .unwrap_or("")
    }

    /// `"January 2025"`
    pub fn label(&self) -> String {
        format!("{} {}", self.month_label(), self.year)
    }
}

// --- Shared building blocks ---

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmptyState {
    #[schema(example = "No Customer Data")]
    pub title: String,
    #[schema(example = "No customer purchases data available for January 2025")]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SummaryCard {
    #[schema(example = "Total Purchases")]
    pub label: String,
    #[schema(value_type = f64, example = 152000)]
    pub amount: Decimal,
    #[schema(example = "Rs 152,000")]
    pub display: String,
    pub caption: Option<String>,
}

/// Highlighted card for the #1 entry of a ranking ("Top Buyer", "Top Seller").
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaderCard {
    #[schema(example = "Top Buyer")]
    pub label: String,
    #[schema(example = "Sara Ahmed")]
    pub name: String,
    #[schema(example = "Rs 2,200")]
    pub display: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChartBar {
    /// Truncated for the axis.
    #[schema(example = "Muhammad Abdullah ...")]
    pub name: String,
    pub full_name: String,
    #[schema(value_type = f64)]
    pub value: Decimal,
    #[schema(example = "Rs 45,000")]
    pub value_display: String,
    #[schema(example = "Rs 45k")]
    pub tick_label: String,
    /// Orders for customers, quantity for products.
    pub secondary: i64,
    #[schema(example = "#3b82f6")]
    pub color: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    #[schema(example = "Top 10 Customers by Purchase Value")]
    pub title: String,
    #[schema(example = "Total Spent")]
    pub value_label: String,
    pub bars: Vec<ChartBar>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Podium {
    Gold,
    Silver,
    Bronze,
}

impl Podium {
    /// Medal for a zero-based ranking position.
    pub fn for_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Podium::Gold),
            1 => Some(Podium::Silver),
            2 => Some(Podium::Bronze),
            _ => None,
        }
    }
}

// =============================================================================
//  Customer purchases tab
// =============================================================================

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPurchasesView {
    pub period: ReportPeriod,
    #[schema(example = "January 2025")]
    pub period_label: String,
    pub customer_count: usize,
    /// Total Purchases, Cash Sales, Credit Sales, Outstanding.
    pub cards: Vec<SummaryCard>,
    pub rows: Vec<PurchaseRow>,
    pub empty_state: Option<EmptyState>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRow {
    #[schema(example = "12-2025-01")]
    pub key: String,
    pub customer_id: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub orders: i64,
    #[schema(example = "1,240")]
    pub items_display: String,
    pub cash_display: String,
    pub total_display: String,
    pub outstanding_display: String,
    pub has_outstanding: bool,
}

/// What the "view details" modal shows for one customer.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSnapshot {
    pub id: String,
    pub name: String,
    pub phone: String,
    #[schema(value_type = f64)]
    pub balance: Decimal,
    #[schema(value_type = f64)]
    pub total_purchases: Decimal,
    pub total_orders: i64,
    pub balance_display: String,
    pub total_purchases_display: String,
}

// =============================================================================
//  Top customers tab
// =============================================================================

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopCustomersView {
    pub period: ReportPeriod,
    pub period_label: String,
    pub customer_count: usize,
    /// Total Purchases, Total Orders.
    pub cards: Vec<SummaryCard>,
    pub top_buyer: Option<LeaderCard>,
    pub chart: ChartSeries,
    pub rows: Vec<TopCustomerRow>,
    pub empty_state: Option<EmptyState>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopCustomerRow {
    pub rank: usize,
    pub podium: Option<Podium>,
    pub customer_id: String,
    pub customer_name: String,
    pub customer_type: CustomerType,
    #[schema(example = "Semi-Permanent")]
    pub type_label: String,
    pub orders_display: String,
    pub total_display: String,
}

// =============================================================================
//  Top products tab
// =============================================================================

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopProductsView {
    pub period: ReportPeriod,
    pub period_label: String,
    pub product_count: usize,
    /// Total Revenue, Total Quantity.
    pub cards: Vec<SummaryCard>,
    pub top_seller: Option<LeaderCard>,
    pub chart: ChartSeries,
    pub rows: Vec<TopProductRow>,
    pub empty_state: Option<EmptyState>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopProductRow {
    pub rank: usize,
    pub podium: Option<Podium>,
    pub product_id: String,
    pub product_name: String,
    pub category_name: String,
    pub times_sold: i64,
    pub quantity_display: String,
    pub revenue_display: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_labels() {
        assert_eq!(ReportPeriod::new(1, 2025).label(), "January 2025");
        assert_eq!(ReportPeriod::new(12, 2024).month_label(), "December");
        assert_eq!(ReportPeriod::new(13, 2024).month_label(), "");
    }

    #[test]
    fn podium_only_for_top_three() {
        assert_eq!(Podium::for_index(0), Some(Podium::Gold));
        assert_eq!(Podium::for_index(2), Some(Podium::Bronze));
        assert_eq!(Podium::for_index(3), None);
    }
}
