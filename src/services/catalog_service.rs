// src/services/catalog_service.rs

use std::{collections::HashMap, sync::Arc};

use reqwest::Url;

use crate::{
    common::error::AppError,
    content,
    models::marketing::{
        GalleryImage, PricingDetailView, PricingGallery, ServiceDetailView, TierKey,
    },
    repo::GallerySource,
};

#[derive(Clone)]
pub struct CatalogService {
    galleries: Option<Arc<dyn GallerySource>>,
    whatsapp_number: String,
}

impl CatalogService {
    pub fn new(galleries: Option<Arc<dyn GallerySource>>, whatsapp_number: impl Into<String>) -> Self {
        Self {
            galleries,
            whatsapp_number: whatsapp_number.into(),
        }
    }

    pub async fn pricing_detail(&self, tier: &str) -> Result<PricingDetailView, AppError> {
        let key = TierKey::parse(tier).ok_or_else(|| AppError::NotFound("Package not found".to_string()))?;
        let tier = content::pricing_tier(key);

        let mut images_by_tier = self.load_gallery_images().await;
        let images = images_by_tier.remove(&key).unwrap_or_default();

        Ok(PricingDetailView {
            key,
            name: tier.name.to_string(),
            price: tier.price.to_string(),
            price_unit: "PKR/sq.ft".to_string(),
            description: tier.description.to_string(),
            badge: tier.badge.to_string(),
            popular: tier.popular,
            features: tier.features.iter().map(|f| f.to_string()).collect(),
            images,
            cta_url: whatsapp_link(&self.whatsapp_number, &format!("Hi! I'm interested in the {}", tier.name)),
            back_link: "/".to_string(),
        })
    }

    pub fn service_detail(&self, slug: &str) -> Result<ServiceDetailView, AppError> {
        let service = content::service(slug).ok_or_else(|| AppError::NotFound("Service not found".to_string()))?;

        Ok(ServiceDetailView {
            slug: service.slug.to_string(),
            name: service.name.to_string(),
            description: service.description.to_string(),
            hero_image: service.images.first().map(|i| i.to_string()),
            features: service.features.iter().map(|f| f.to_string()).collect(),
            images: service.images.iter().map(|i| i.to_string()).collect(),
            cta_url: whatsapp_link(&self.whatsapp_number, &format!("Hi! I'm interested in {}", service.name)),
            gallery_link: "/gallery".to_string(),
            contact_link: "/contact".to_string(),
        })
    }

    // Gallery problems never break the page; the tier just shows no photos.
    async fn load_gallery_images(&self) -> HashMap<TierKey, Vec<GalleryImage>> {
        let Some(source) = &self.galleries else {
            return HashMap::new();
        };

        match source.pricing_galleries().await {
            Ok(galleries) => images_by_tier(&galleries),
            Err(e) => {
                tracing::error!("Error fetching pricing galleries: {}", e);
                HashMap::new()
            }
        }
    }
}

/// Groups gallery images per tier. A later gallery for the same tier replaces
/// an earlier one; galleries without a tier or without images are skipped.
pub fn images_by_tier(galleries: &[PricingGallery]) -> HashMap<TierKey, Vec<GalleryImage>> {
    let mut by_tier = HashMap::new();
    for gallery in galleries {
        let (Some(key), Some(items)) = (TierKey::from_gallery_title(&gallery.title), &gallery.gallery) else {
            continue;
        };

        let images = items
            .iter()
            .enumerate()
            .map(|(index, item)| GalleryImage {
                id: index.to_string(),
                image_url: item.url.clone(),
                title: item.name.clone().filter(|name| !name.is_empty()),
            })
            .collect();
        by_tier.insert(key, images);
    }
    by_tier
}

/// `https://wa.me/<number>?text=<message>`, with the message percent-encoded.
pub fn whatsapp_link(number: &str, message: &str) -> String {
    match Url::parse(&format!("https://wa.me/{number}")) {
        Ok(mut url) => {
            url.query_pairs_mut().append_pair("text", message);
            url.to_string()
        }
        // Only reachable with a malformed configured number.
        Err(_) => format!("https://wa.me/{number}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::marketing::GalleryItem;

    fn gallery(title: &str, urls: &[&str]) -> PricingGallery {
        PricingGallery {
            title: title.to_string(),
            gallery: Some(
                urls.iter()
                    .map(|u| GalleryItem {
                        url: u.to_string(),
                        name: None,
                    })
                    .collect(),
            ),
        }
    }

    #[test]
    fn galleries_are_grouped_by_title() {
        let galleries = vec![
            gallery("Essential Ceilings", &["a.jpg", "b.jpg"]),
            gallery("Random", &["x.jpg"]),
            gallery("Luxury Homes", &["c.jpg"]),
            PricingGallery {
                title: "Premium".to_string(),
                gallery: None,
            },
        ];

        let by_tier = images_by_tier(&galleries);
        assert_eq!(by_tier.len(), 2);
        assert_eq!(by_tier[&TierKey::Basic].len(), 2);
        assert_eq!(by_tier[&TierKey::Basic][1].id, "1");
        assert_eq!(by_tier[&TierKey::High][0].image_url, "c.jpg");
        assert!(!by_tier.contains_key(&TierKey::Medium));
    }

    #[test]
    fn later_gallery_replaces_earlier_one() {
        let galleries = vec![gallery("Premium A", &["1.jpg"]), gallery("Premium B", &["2.jpg", "3.jpg"])];
        let by_tier = images_by_tier(&galleries);
        assert_eq!(by_tier[&TierKey::Medium].len(), 2);
    }

    #[test]
    fn whatsapp_link_encodes_the_message() {
        let message = "Hi! I'm interested in Luxury Ceiling Design for Homes & Offices";
        let link = whatsapp_link("923458783923", message);
        assert!(link.starts_with("https://wa.me/923458783923?text="));
        assert!(!link.contains(' '));

        let url = Url::parse(&link).unwrap();
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs, vec![("text".to_string(), message.to_string())]);
    }

    #[tokio::test]
    async fn pricing_without_gallery_source_has_no_images() {
        let service = CatalogService::new(None, "923458783923");
        let view = service.pricing_detail("high").await.unwrap();
        assert_eq!(view.name, "Luxury Package");
        assert_eq!(view.price, "110");
        assert!(view.images.is_empty());
        assert!(view.cta_url.contains("Luxury+Package"));
    }

    #[tokio::test]
    async fn unknown_tier_is_not_found() {
        let service = CatalogService::new(None, "923458783923");
        assert!(matches!(
            service.pricing_detail("platinum").await,
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn service_detail_uses_first_image_as_hero() {
        let service = CatalogService::new(None, "923458783923");
        let view = service.service_detail("gypsum-false-ceiling").unwrap();
        assert_eq!(view.hero_image.as_deref(), Some("/assets/office-ceiling.jpg"));
        assert_eq!(view.features.len(), 6);
        assert!(matches!(service.service_detail("nope"), Err(AppError::NotFound(_))));
    }
}
