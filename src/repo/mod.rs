// src/repo/mod.rs

//! Upstream data providers. The gateway only reads: report rows come from the
//! reporting API, pricing galleries from WordPress.

use async_trait::async_trait;

use crate::{
    common::error::AppError,
    models::{
        dashboard::{FinancialReport, InventoryReport, SalesReport},
        marketing::PricingGallery,
        report_views::ReportPeriod,
        reports::{CustomerRankRecord, ProductRecord, PurchaseRecord},
    },
};

pub mod reports_api;
pub mod wordpress;

pub use reports_api::ReportsApiRepository;
pub use wordpress::WordpressRepository;

#[async_trait]
pub trait ReportSource: Send + Sync {
    async fn customer_purchases(&self, period: ReportPeriod) -> Result<Vec<PurchaseRecord>, AppError>;

    async fn top_customers(&self, period: ReportPeriod) -> Result<Vec<CustomerRankRecord>, AppError>;

    async fn top_products(&self, period: ReportPeriod) -> Result<Vec<ProductRecord>, AppError>;

    async fn sales_report(&self) -> Result<SalesReport, AppError>;

    async fn inventory_report(&self) -> Result<InventoryReport, AppError>;

    async fn financial_report(&self) -> Result<FinancialReport, AppError>;
}

#[async_trait]
pub trait GallerySource: Send + Sync {
    async fn pricing_galleries(&self) -> Result<Vec<PricingGallery>, AppError>;
}
