// tests/common/mod.rs

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::{body::Body, http::Request, Router};
use ceiling_studio::{
    build_router,
    common::error::AppError,
    models::{
        dashboard::{FinancialReport, InventoryReport, SalesReport},
        marketing::PricingGallery,
        report_views::ReportPeriod,
        reports::{CustomerRankRecord, ProductRecord, PurchaseRecord},
    },
    repo::{GallerySource, ReportSource},
    AppState,
};
use serde_json::{json, Value};
use tower::ServiceExt;

/// Canned reporting API. A report left as `None` fails like an unreachable
/// upstream section would.
#[derive(Default)]
pub struct FakeReports {
    pub purchases: Vec<PurchaseRecord>,
    pub top_customers: Vec<CustomerRankRecord>,
    pub top_products: Vec<ProductRecord>,
    pub sales: Option<Value>,
    pub inventory: Option<Value>,
    pub financial: Option<Value>,
}

fn canned<T: serde::de::DeserializeOwned>(name: &str, payload: &Option<Value>) -> Result<T, AppError> {
    let value = payload
        .clone()
        .ok_or_else(|| AppError::InternalServerError(anyhow::anyhow!("{name} report unavailable")))?;
    serde_json::from_value(value).map_err(|e| AppError::InternalServerError(e.into()))
}

#[async_trait]
impl ReportSource for FakeReports {
    async fn customer_purchases(&self, _period: ReportPeriod) -> Result<Vec<PurchaseRecord>, AppError> {
        Ok(self.purchases.clone())
    }

    async fn top_customers(&self, _period: ReportPeriod) -> Result<Vec<CustomerRankRecord>, AppError> {
        Ok(self.top_customers.clone())
    }

    async fn top_products(&self, _period: ReportPeriod) -> Result<Vec<ProductRecord>, AppError> {
        Ok(self.top_products.clone())
    }

    async fn sales_report(&self) -> Result<SalesReport, AppError> {
        canned("sales", &self.sales)
    }

    async fn inventory_report(&self) -> Result<InventoryReport, AppError> {
        canned("inventory", &self.inventory)
    }

    async fn financial_report(&self) -> Result<FinancialReport, AppError> {
        canned("financial", &self.financial)
    }
}

pub struct FakeGalleries(pub Value);

#[async_trait]
impl GallerySource for FakeGalleries {
    async fn pricing_galleries(&self) -> Result<Vec<PricingGallery>, AppError> {
        serde_json::from_value(self.0.clone()).map_err(|e| AppError::InternalServerError(e.into()))
    }
}

pub fn sample_reports() -> FakeReports {
    FakeReports {
        purchases: serde_json::from_value(json!([
            {
                "customer_id": 1, "customer_name": "Ali Khan", "customer_phone": "0300-1112223",
                "times_purchased": 3, "total_items_purchased": 40,
                "cash_purchases": "1000", "total_purchase_value": "1500",
                "outstanding_balance": "250", "month": "2025-01", "year": 2025
            },
            {
                "customer_id": 2, "customer_name": "Sara Ahmed", "customer_phone": "0311-4445556",
                "times_purchased": 5, "total_items_purchased": 12,
                "cash_purchases": 2200, "total_purchase_value": 2200,
                "outstanding_balance": 0, "month": "2025-01", "year": 2025
            },
            {
                "customer_id": 3, "customer_name": "Omar Farooq", "customer_phone": "0322-7778889",
                "times_purchased": 1, "total_items_purchased": 2,
                "cash_purchases": 0, "total_purchase_value": "700",
                "outstanding_balance": "700", "month": "2025-01", "year": 2025
            }
        ]))
        .unwrap(),
        top_customers: serde_json::from_value(json!([
            { "customer_id": 1, "customer_name": "Ali Khan", "customer_type": "permanent",
              "times_purchased": 3, "total_purchase_value": "1500" },
            { "customer_id": 2, "customer_name": "Sara Ahmed", "customer_type": "temporary",
              "times_purchased": 5, "total_purchase_value": "2200" }
        ]))
        .unwrap(),
        top_products: serde_json::from_value(json!([
            { "product_id": 7, "product_name": "Gypsum Board 12mm", "category_name": "Boards",
              "times_sold": 9, "total_quantity": 120, "total_revenue": "54000" }
        ]))
        .unwrap(),
        sales: Some(json!({ "summary": { "totalRevenue": 1250000, "totalOrders": 342, "growth": 12.5 } })),
        inventory: Some(json!({ "inventoryReport": { "totalProducts": 48, "lowStockItems": [] } })),
        financial: Some(json!({ "summary": { "totalIncome": "1400000", "netProfit": 300000 } })),
    }
}

pub fn app(reports: FakeReports, galleries: Option<Value>) -> Router {
    let galleries = galleries.map(|g| Arc::new(FakeGalleries(g)) as Arc<dyn GallerySource>);
    build_router(AppState::from_sources(Arc::new(reports), galleries, "923001234567"))
}

/// GETs `uri` and returns the status with the decoded JSON body (Null when the
/// body is not JSON).
pub async fn get(app: Router, uri: &str) -> (u16, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status().as_u16();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}
