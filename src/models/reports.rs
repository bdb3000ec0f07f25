// src/models/reports.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::common::numeric::{lenient_decimal, lenient_integer, lenient_string};

// --- Enums ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum CustomerType {
    Permanent,
    SemiPermanent,
    Temporary,
    #[default]
    Unknown,
}

impl CustomerType {
    /// Case-insensitive; anything unrecognised is `Unknown`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "permanent" => CustomerType::Permanent,
            "semi-permanent" => CustomerType::SemiPermanent,
            "temporary" => CustomerType::Temporary,
            _ => CustomerType::Unknown,
        }
    }

    pub fn display_label(&self) -> &'static str {
        match self {
            CustomerType::Permanent => "Permanent",
            CustomerType::SemiPermanent => "Semi-Permanent",
            CustomerType::Temporary => "Temporary",
            CustomerType::Unknown => "Unknown",
        }
    }
}

impl<'de> Deserialize<'de> for CustomerType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        lenient_string(deserializer).map(|label| CustomerType::from_label(&label))
    }
}

// --- Records (one row of a reporting period, as sent by the reporting API) ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub customer_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub customer_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub customer_phone: String,

    #[serde(default, deserialize_with = "lenient_integer")]
    pub times_purchased: i64,
    #[serde(default, deserialize_with = "lenient_integer")]
    pub total_items_purchased: i64,

    #[serde(default, deserialize_with = "lenient_decimal")]
    pub cash_purchases: Decimal,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub total_purchase_value: Decimal,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub outstanding_balance: Decimal,

    #[serde(default, deserialize_with = "lenient_string")]
    pub month: String,
    #[serde(default, deserialize_with = "lenient_integer")]
    pub year: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub product_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub product_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub category_name: String,

    #[serde(default, deserialize_with = "lenient_integer")]
    pub times_sold: i64,
    #[serde(default, deserialize_with = "lenient_integer")]
    pub total_quantity: i64,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub total_revenue: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRankRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub customer_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub customer_name: String,
    #[serde(default)]
    pub customer_type: CustomerType,

    #[serde(default, deserialize_with = "lenient_integer")]
    pub times_purchased: i64,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub total_purchase_value: Decimal,
}
