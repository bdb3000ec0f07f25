// src/models/marketing.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::common::numeric::lenient_string;

// --- Static catalog entries ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TierKey {
    Basic,
    Medium,
    High,
}

impl TierKey {
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "basic" => Some(TierKey::Basic),
            "medium" => Some(TierKey::Medium),
            "high" => Some(TierKey::High),
            _ => None,
        }
    }

    /// Which tier a WordPress gallery belongs to, judging by its title.
    pub fn from_gallery_title(title: &str) -> Option<Self> {
        let title = title.to_lowercase();
        if title.contains("essential") {
            Some(TierKey::Basic)
        } else if title.contains("premium") {
            Some(TierKey::Medium)
        } else if title.contains("luxury") {
            Some(TierKey::High)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PricingTier {
    pub key: TierKey,
    pub name: &'static str,
    pub price: &'static str, // PKR per sq.ft
    pub description: &'static str,
    pub badge: &'static str,
    pub popular: bool,
    pub features: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct ServiceOffering {
    pub slug: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub images: &'static [&'static str],
}

// --- WordPress payload ---

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PricingGallery {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default)]
    pub gallery: Option<Vec<GalleryItem>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GalleryItem {
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: String,
    #[serde(default)]
    pub name: Option<String>,
}

// --- Views ---

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    #[schema(example = "0")]
    pub id: String,
    pub image_url: String,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PricingDetailView {
    pub key: TierKey,
    #[schema(example = "Premium Package")]
    pub name: String,
    #[schema(example = "90")]
    pub price: String,
    #[schema(example = "PKR/sq.ft")]
    pub price_unit: String,
    pub description: String,
    #[schema(example = "Premium")]
    pub badge: String,
    pub popular: bool,
    pub features: Vec<String>,
    pub images: Vec<GalleryImage>,
    pub cta_url: String,
    #[schema(example = "/")]
    pub back_link: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDetailView {
    #[schema(example = "gypsum-false-ceiling")]
    pub slug: String,
    #[schema(example = "Gypsum False Ceiling")]
    pub name: String,
    pub description: String,
    pub hero_image: Option<String>,
    pub features: Vec<String>,
    pub images: Vec<String>,
    pub cta_url: String,
    #[schema(example = "/gallery")]
    pub gallery_link: String,
    #[schema(example = "/contact")]
    pub contact_link: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gallery_titles_map_to_tiers() {
        assert_eq!(TierKey::from_gallery_title("Essential Ceilings"), Some(TierKey::Basic));
        assert_eq!(TierKey::from_gallery_title("PREMIUM work"), Some(TierKey::Medium));
        assert_eq!(TierKey::from_gallery_title("Luxury"), Some(TierKey::High));
        assert_eq!(TierKey::from_gallery_title("Office projects"), None);
    }

    #[test]
    fn tier_keys_are_exact() {
        assert_eq!(TierKey::parse("medium"), Some(TierKey::Medium));
        assert_eq!(TierKey::parse("Medium"), None);
        assert_eq!(TierKey::parse("gold"), None);
    }
}
