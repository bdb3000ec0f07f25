// src/services/report_service.rs

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::{
    analytics::{
        aggregate, format_count, format_currency, format_number, purchase_totals, rank_by_value,
        search, sort_purchases, top_n, Aggregate, SortKey, CHART_TOP_N,
    },
    analytics::format::format_axis_thousands,
    common::error::AppError,
    models::{
        report_views::{
            ChartBar, ChartSeries, CustomerPurchasesView, CustomerSnapshot, EmptyState, LeaderCard,
            Podium, PurchaseRow, ReportPeriod, SummaryCard, TopCustomerRow, TopCustomersView,
            TopProductRow, TopProductsView,
        },
        reports::{CustomerRankRecord, ProductRecord, PurchaseRecord},
    },
    repo::ReportSource,
};

const CHART_COLORS: [&str; 10] = [
    "#3b82f6", // Blue
    "#10b981", // Emerald
    "#f59e0b", // Amber
    "#ef4444", // Red
    "#8b5cf6", // Purple
    "#06b6d4", // Cyan
    "#ec4899", // Pink
    "#84cc16", // Lime
    "#f97316", // Orange
    "#6366f1", // Indigo
];

const CUSTOMER_NAME_MAX: usize = 18;
const PRODUCT_NAME_MAX: usize = 20;

#[derive(Clone)]
pub struct ReportService {
    source: Arc<dyn ReportSource>,
}

impl ReportService {
    pub fn new(source: Arc<dyn ReportSource>) -> Self {
        Self { source }
    }

    pub async fn customer_purchases(
        &self,
        period: ReportPeriod,
        query: &str,
        sort: Option<SortKey>,
    ) -> Result<CustomerPurchasesView, AppError> {
        let records = self.source.customer_purchases(period).await?;
        tracing::debug!(rows = records.len(), %query, ?sort, "Building customer purchases view");
        Ok(build_customer_purchases_view(&records, period, query, sort))
    }

    pub async fn customer_snapshot(
        &self,
        period: ReportPeriod,
        customer_id: &str,
    ) -> Result<CustomerSnapshot, AppError> {
        let records = self.source.customer_purchases(period).await?;
        records
            .iter()
            .find(|r| r.customer_id == customer_id)
            .map(build_customer_snapshot)
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "No purchases for customer {} in {}",
                    customer_id,
                    period.label()
                ))
            })
    }

    pub async fn top_customers(&self, period: ReportPeriod) -> Result<TopCustomersView, AppError> {
        let records = self.source.top_customers(period).await?;
        Ok(build_top_customers_view(&records, period))
    }

    pub async fn top_products(&self, period: ReportPeriod) -> Result<TopProductsView, AppError> {
        let records = self.source.top_products(period).await?;
        Ok(build_top_products_view(&records, period))
    }
}

// =============================================================================
//  View builders (pure)
// =============================================================================

pub fn build_customer_purchases_view(
    records: &[PurchaseRecord],
    period: ReportPeriod,
    query: &str,
    sort: Option<SortKey>,
) -> CustomerPurchasesView {
    let empty_state = records.is_empty().then(|| EmptyState {
        title: "No Customer Data".to_string(),
        message: format!("No customer purchases data available for {}", period.label()),
    });

    let filtered = sort_purchases(&search(records, query), sort);
    // Cards describe what the table shows, so they follow the search filter.
    let totals = purchase_totals(&filtered);

    let cards = vec![
        money_card("Total Purchases", totals.purchases, None),
        money_card("Cash Sales", totals.cash, None),
        money_card("Credit Sales", totals.credit, None),
        money_card("Outstanding", totals.outstanding, None),
    ];

    let rows = filtered
        .iter()
        .map(|r| PurchaseRow {
            key: format!("{}-{}", r.customer_id, r.month),
            customer_id: r.customer_id.clone(),
            customer_name: r.customer_name.clone(),
            customer_phone: r.customer_phone.clone(),
            orders: r.times_purchased,
            items_display: format_count(&r.total_items_purchased),
            cash_display: format_currency(&r.cash_purchases),
            total_display: format_currency(&r.total_purchase_value),
            outstanding_display: format_currency(&r.outstanding_balance),
            has_outstanding: r.outstanding_balance > Decimal::ZERO,
        })
        .collect::<Vec<_>>();

    CustomerPurchasesView {
        period,
        period_label: period.label(),
        customer_count: rows.len(),
        cards,
        rows,
        empty_state,
    }
}

pub fn build_customer_snapshot(record: &PurchaseRecord) -> CustomerSnapshot {
    CustomerSnapshot {
        id: record.customer_id.clone(),
        name: record.customer_name.clone(),
        phone: record.customer_phone.clone(),
        balance: record.outstanding_balance,
        total_purchases: record.total_purchase_value,
        total_orders: record.times_purchased,
        balance_display: format_currency(&record.outstanding_balance),
        total_purchases_display: format_currency(&record.total_purchase_value),
    }
}

pub fn build_top_customers_view(records: &[CustomerRankRecord], period: ReportPeriod) -> TopCustomersView {
    let empty_state = records.is_empty().then(|| EmptyState {
        title: "No Customers Data".to_string(),
        message: format!("No customer purchase data available for {}", period.label()),
    });

    let ranked = rank_by_value(records);
    let totals = aggregate(&ranked);

    let cards = vec![
        money_card("Total Purchases", totals.total_value, Some("Total customer spending")),
        count_card("Total Orders", totals.total_count, Some("Orders placed this month")),
    ];

    let top_buyer = ranked.first().map(|c| LeaderCard {
        label: "Top Buyer".to_string(),
        name: c.customer_name.clone(),
        display: format_currency(&c.total_purchase_value),
    });

    let chart = ChartSeries {
        title: "Top 10 Customers by Purchase Value".to_string(),
        value_label: "Total Spent".to_string(),
        bars: chart_bars(&ranked, CUSTOMER_NAME_MAX, |c| c.customer_name.as_str()),
    };

    let rows = ranked
        .iter()
        .enumerate()
        .map(|(index, c)| TopCustomerRow {
            rank: index + 1,
            podium: Podium::for_index(index),
            customer_id: c.customer_id.clone(),
            customer_name: c.customer_name.clone(),
            customer_type: c.customer_type,
            type_label: c.customer_type.display_label().to_string(),
            orders_display: format_count(&c.times_purchased),
            total_display: format_currency(&c.total_purchase_value),
        })
        .collect();

    TopCustomersView {
        period,
        period_label: period.label(),
        customer_count: ranked.len(),
        cards,
        top_buyer,
        chart,
        rows,
        empty_state,
    }
}

pub fn build_top_products_view(records: &[ProductRecord], period: ReportPeriod) -> TopProductsView {
    let empty_state = records.is_empty().then(|| EmptyState {
        title: "No Products Data".to_string(),
        message: format!("No product sales data available for {}", period.label()),
    });

    let ranked = rank_by_value(records);
    let totals = aggregate(&ranked);

    let cards = vec![
        money_card("Total Revenue", totals.total_value, Some("From top products this month")),
        count_card("Total Quantity", totals.total_count, Some("Units sold this month")),
    ];

    let top_seller = ranked.first().map(|p| LeaderCard {
        label: "Top Seller".to_string(),
        name: p.product_name.clone(),
        display: format_currency(&p.total_revenue),
    });

    let chart = ChartSeries {
        title: "Top 10 Products by Revenue".to_string(),
        value_label: "Revenue".to_string(),
        bars: chart_bars(&ranked, PRODUCT_NAME_MAX, |p| p.product_name.as_str()),
    };

    let rows = ranked
        .iter()
        .enumerate()
        .map(|(index, p)| TopProductRow {
            rank: index + 1,
            podium: Podium::for_index(index),
            product_id: p.product_id.clone(),
            product_name: p.product_name.clone(),
            category_name: p.category_name.clone(),
            times_sold: p.times_sold,
            quantity_display: format_number(&p.total_quantity),
            revenue_display: format_currency(&p.total_revenue),
        })
        .collect();

    TopProductsView {
        period,
        period_label: period.label(),
        product_count: ranked.len(),
        cards,
        top_seller,
        chart,
        rows,
        empty_state,
    }
}

// --- Helpers ---

fn chart_bars<T, F>(records: &[T], name_max: usize, name_of: F) -> Vec<ChartBar>
where
    T: Aggregate + Clone,
    F: Fn(&T) -> &str,
{
    top_n(records, CHART_TOP_N)
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let full_name = name_of(record).to_string();
            ChartBar {
                name: truncate_label(&full_name, name_max),
                full_name,
                value: record.value(),
                value_display: format_currency(&record.value()),
                tick_label: format_axis_thousands(&record.value()),
                secondary: record.count(),
                color: CHART_COLORS[index % CHART_COLORS.len()].to_string(),
            }
        })
        .collect()
}

/// Cuts names longer than `max` characters and appends `"..."`.
pub fn truncate_label(name: &str, max: usize) -> String {
    if name.chars().count() > max {
        let head: String = name.chars().take(max).collect();
        format!("{head}...")
    } else {
        name.to_string()
    }
}

fn money_card(label: &str, amount: Decimal, caption: Option<&str>) -> SummaryCard {
    SummaryCard {
        label: label.to_string(),
        amount,
        display: format_currency(&amount),
        caption: caption.map(str::to_string),
    }
}

fn count_card(label: &str, count: i64, caption: Option<&str>) -> SummaryCard {
    SummaryCard {
        label: label.to_string(),
        amount: Decimal::from(count),
        display: format_count(&count),
        caption: caption.map(str::to_string),
    }
}
