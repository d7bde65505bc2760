use anyhow::Result;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::common::ListingId;

/// Listing - a used book offered for sale, as persisted by the listing store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: ListingId,

    // Book
    pub title: String,
    pub author: String,
    pub price: Decimal,
    pub description: String,
    pub category: Category,
    pub image: Option<String>,

    // Older listings were saved before shipping existed
    pub shipping: Option<ShippingDetails>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// How a book reaches the buyer, with the cost charged for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingDetails {
    pub method: ShippingMethod,
    pub cost: Decimal,
    pub address: String,
    pub city: String,
    pub postal_code: String,
}

// =============================================================================
// Enums
// =============================================================================

/// Book category shown as a pill selector on the listing form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[default]
    Fiction,
    #[serde(rename = "Non-Fiction")]
    NonFiction,
    Science,
    Technology,
    #[serde(rename = "Art & Design")]
    ArtAndDesign,
    Business,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 6] = [
        Category::Fiction,
        Category::NonFiction,
        Category::Science,
        Category::Technology,
        Category::ArtAndDesign,
        Category::Business,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Fiction => "Fiction",
            Category::NonFiction => "Non-Fiction",
            Category::Science => "Science",
            Category::Technology => "Technology",
            Category::ArtAndDesign => "Art & Design",
            Category::Business => "Business",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Category::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| anyhow::anyhow!("Invalid category: {}", s))
    }
}

/// Shipping method enum
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShippingMethod {
    #[default]
    Standard,
    Express,
    #[serde(rename = "Local Pickup")]
    LocalPickup,
}

impl ShippingMethod {
    pub const ALL: [ShippingMethod; 3] = [
        ShippingMethod::Standard,
        ShippingMethod::Express,
        ShippingMethod::LocalPickup,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ShippingMethod::Standard => "Standard",
            ShippingMethod::Express => "Express",
            ShippingMethod::LocalPickup => "Local Pickup",
        }
    }

    /// Whether the seller needs a delivery address for this method
    pub fn requires_address(&self) -> bool {
        !matches!(self, ShippingMethod::LocalPickup)
    }
}

impl std::fmt::Display for ShippingMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for ShippingMethod {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        ShippingMethod::ALL
            .into_iter()
            .find(|m| m.label() == s)
            .ok_or_else(|| anyhow::anyhow!("Invalid shipping method: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn category_labels_roundtrip_through_from_str() {
        for category in Category::ALL {
            assert_eq!(Category::from_str(category.label()).unwrap(), category);
        }
    }

    #[test]
    fn category_rejects_free_text() {
        assert!(Category::from_str("Poetry").is_err());
        assert!(Category::from_str("fiction").is_err());
    }

    #[test]
    fn serde_uses_display_labels() {
        let json = serde_json::to_string(&Category::ArtAndDesign).unwrap();
        assert_eq!(json, "\"Art & Design\"");

        let method: ShippingMethod = serde_json::from_str("\"Local Pickup\"").unwrap();
        assert_eq!(method, ShippingMethod::LocalPickup);
    }

    #[test]
    fn only_local_pickup_skips_address() {
        assert!(ShippingMethod::Standard.requires_address());
        assert!(ShippingMethod::Express.requires_address());
        assert!(!ShippingMethod::LocalPickup.requires_address());
    }
}
