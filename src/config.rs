// src/config.rs

use std::{env, sync::Arc, time::Duration};

use anyhow::Context;

use crate::{
    repo::{GallerySource, ReportSource, ReportsApiRepository, WordpressRepository},
    services::{CatalogService, DashboardService, ReportService},
};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_WHATSAPP_NUMBER: &str = "923458783923";
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;

// Everything read from the environment (or .env) at startup
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub bind_addr: String,
    pub reports_api_url: String,
    pub wordpress_api_url: Option<String>,
    pub whatsapp_number: String,
    pub upstream_timeout: Duration,
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same rules as `from_env`, reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let reports_api_url = non_empty("REPORTS_API_URL").context("REPORTS_API_URL must be set")?;

        let upstream_timeout = match non_empty("UPSTREAM_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .with_context(|| format!("UPSTREAM_TIMEOUT_SECS is not a number: {raw}"))?,
            None => DEFAULT_UPSTREAM_TIMEOUT_SECS,
        };

        Ok(Self {
            bind_addr: non_empty("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            reports_api_url,
            wordpress_api_url: non_empty("WORDPRESS_API_URL"),
            whatsapp_number: non_empty("WHATSAPP_NUMBER").unwrap_or_else(|| DEFAULT_WHATSAPP_NUMBER.to_string()),
            upstream_timeout: Duration::from_secs(upstream_timeout),
        })
    }
}

// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub report_service: ReportService,
    pub dashboard_service: DashboardService,
    pub catalog_service: CatalogService,
}

impl AppState {
    pub fn new(settings: &Settings) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(settings.upstream_timeout)
            .build()
            .context("Failed to build the HTTP client")?;

        let reports: Arc<dyn ReportSource> =
            Arc::new(ReportsApiRepository::new(client.clone(), &settings.reports_api_url));
        tracing::info!("Reporting API: {}", settings.reports_api_url);

        let galleries = settings.wordpress_api_url.as_ref().map(|url| {
            tracing::info!("WordPress galleries: {}", url);
            Arc::new(WordpressRepository::new(client.clone(), url)) as Arc<dyn GallerySource>
        });
        if galleries.is_none() {
            tracing::warn!("WORDPRESS_API_URL not set; pricing pages will have no gallery images");
        }

        Ok(Self::from_sources(reports, galleries, &settings.whatsapp_number))
    }

    // --- Assembles the dependency graph ---
    pub fn from_sources(
        reports: Arc<dyn ReportSource>,
        galleries: Option<Arc<dyn GallerySource>>,
        whatsapp_number: &str,
    ) -> Self {
        Self {
            report_service: ReportService::new(reports.clone()),
            dashboard_service: DashboardService::new(reports),
            catalog_service: CatalogService::new(galleries, whatsapp_number),
        }
    }
}
