// src/repo/reports_api.rs

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize};

use crate::{
    common::error::AppError,
    models::{
        dashboard::{FinancialReport, InventoryReport, SalesReport},
        report_views::ReportPeriod,
        reports::{CustomerRankRecord, ProductRecord, PurchaseRecord},
    },
    repo::ReportSource,
};

/// Bodies come either bare or wrapped as `{ "data": ... }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    pub(crate) fn into_inner(self) -> T {
        match self {
            Envelope::Wrapped { data } => data,
            Envelope::Bare(data) => data,
        }
    }
}

// Client for the external reporting API
#[derive(Clone)]
pub struct ReportsApiRepository {
    client: Client,
    base_url: String,
}

impl ReportsApiRepository {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    async fn get_json<T>(&self, path: &str, query: &[(&str, String)]) -> Result<T, AppError>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "Fetching report");

        let body = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await?
            .error_for_status()?
            .json::<Envelope<T>>()
            .await?;

        Ok(body.into_inner())
    }

    fn period_query(period: ReportPeriod) -> [(&'static str, String); 2] {
        [
            ("month", period.month.to_string()),
            ("year", period.year.to_string()),
        ]
    }
}

#[async_trait]
impl ReportSource for ReportsApiRepository {
    async fn customer_purchases(&self, period: ReportPeriod) -> Result<Vec<PurchaseRecord>, AppError> {
        self.get_json("/reports/monthly/customer-purchases", &Self::period_query(period))
            .await
    }

    async fn top_customers(&self, period: ReportPeriod) -> Result<Vec<CustomerRankRecord>, AppError> {
        self.get_json("/reports/monthly/top-customers", &Self::period_query(period))
            .await
    }

    async fn top_products(&self, period: ReportPeriod) -> Result<Vec<ProductRecord>, AppError> {
        self.get_json("/reports/monthly/top-products", &Self::period_query(period))
            .await
    }

    async fn sales_report(&self) -> Result<SalesReport, AppError> {
        self.get_json("/reports/sales", &[]).await
    }

    async fn inventory_report(&self) -> Result<InventoryReport, AppError> {
        self.get_json("/reports/inventory", &[]).await
    }

    async fn financial_report(&self) -> Result<FinancialReport, AppError> {
        self.get_json("/reports/financial", &[]).await
    }
}
