use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::listing::{Category, Listing, ShippingDetails};

/// Store-ready form of a draft that passed validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub title: String,
    pub author: String,
    pub price: Decimal,
    pub description: String,
    pub image: Option<String>,
    pub category: Category,
    pub shipping: ShippingDetails,
}

impl SubmissionPayload {
    /// True when `listing` carries exactly the fields of this payload.
    pub fn matches(&self, listing: &Listing) -> bool {
        self.title == listing.title
            && self.author == listing.author
            && self.price == listing.price
            && self.description == listing.description
            && self.image == listing.image
            && self.category == listing.category
            && listing.shipping.as_ref() == Some(&self.shipping)
    }
}
