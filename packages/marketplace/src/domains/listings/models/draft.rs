use serde::{Deserialize, Serialize};

use super::listing::{Category, Listing, ShippingMethod};

/// Unsaved listing being composed or edited.
///
/// Numeric fields hold the raw text the user typed so partial input like
/// `"12."` survives between keystrokes; parsing happens on validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListingDraft {
    pub title: String,
    pub author: String,
    pub price_text: String,
    pub description: String,
    pub category: Category,
    pub image_ref: Option<String>,
    pub shipping: ShippingDraft,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShippingDraft {
    pub method: ShippingMethod,
    pub cost_text: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
}

impl From<&Listing> for ListingDraft {
    fn from(listing: &Listing) -> Self {
        let shipping = listing
            .shipping
            .as_ref()
            .map(|s| ShippingDraft {
                method: s.method,
                cost_text: s.cost.to_string(),
                address: s.address.clone(),
                city: s.city.clone(),
                postal_code: s.postal_code.clone(),
            })
            .unwrap_or_default();

        Self {
            title: listing.title.clone(),
            author: listing.author.clone(),
            price_text: listing.price.to_string(),
            description: listing.description.clone(),
            category: listing.category,
            image_ref: listing.image.clone(),
            shipping,
        }
    }
}

/// Free-text book fields editable on the listing form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingField {
    Title,
    Author,
    Price,
    Description,
}

impl ListingField {
    pub fn label(&self) -> &'static str {
        match self {
            ListingField::Title => "title",
            ListingField::Author => "author",
            ListingField::Price => "price",
            ListingField::Description => "description",
        }
    }
}

impl std::fmt::Display for ListingField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Free-text shipping fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShippingField {
    Cost,
    Address,
    City,
    PostalCode,
}

impl ShippingField {
    pub fn label(&self) -> &'static str {
        match self {
            ShippingField::Cost => "shipping cost",
            ShippingField::Address => "address",
            ShippingField::City => "city",
            ShippingField::PostalCode => "postal code",
        }
    }
}

impl std::fmt::Display for ShippingField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl ListingDraft {
    pub(crate) fn text_mut(&mut self, field: ListingField) -> &mut String {
        match field {
            ListingField::Title => &mut self.title,
            ListingField::Author => &mut self.author,
            ListingField::Price => &mut self.price_text,
            ListingField::Description => &mut self.description,
        }
    }

    pub fn text(&self, field: ListingField) -> &str {
        match field {
            ListingField::Title => &self.title,
            ListingField::Author => &self.author,
            ListingField::Price => &self.price_text,
            ListingField::Description => &self.description,
        }
    }
}

impl ShippingDraft {
    pub(crate) fn text_mut(&mut self, field: ShippingField) -> &mut String {
        match field {
            ShippingField::Cost => &mut self.cost_text,
            ShippingField::Address => &mut self.address,
            ShippingField::City => &mut self.city,
            ShippingField::PostalCode => &mut self.postal_code,
        }
    }

    pub fn text(&self, field: ShippingField) -> &str {
        match field {
            ShippingField::Cost => &self.cost_text,
            ShippingField::Address => &self.address,
            ShippingField::City => &self.city,
            ShippingField::PostalCode => &self.postal_code,
        }
    }
}
