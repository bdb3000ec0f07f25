// src/repo/wordpress.rs

use async_trait::async_trait;
use reqwest::Client;

use crate::{
    common::error::AppError,
    models::marketing::PricingGallery,
    repo::{reports_api::Envelope, GallerySource},
};

// Reads the pricing galleries published through the WordPress site
#[derive(Clone)]
pub struct WordpressRepository {
    client: Client,
    base_url: String,
}

impl WordpressRepository {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }
}

#[async_trait]
impl GallerySource for WordpressRepository {
    async fn pricing_galleries(&self) -> Result<Vec<PricingGallery>, AppError> {
        let url = format!("{}/pricing-galleries", self.base_url);
        tracing::debug!(%url, "Fetching pricing galleries");

        let body = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<Envelope<Vec<PricingGallery>>>()
            .await?;

        Ok(body.into_inner())
    }
}
