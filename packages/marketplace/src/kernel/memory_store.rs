//! In-process listing store used by the CLI host and integration tests.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::{BaseListingStore, BaseSellerRegistry, StoreError};
use crate::common::ListingId;
use crate::domains::listings::{Listing, SubmissionPayload};
use crate::domains::seller_registration::SellerApplication;

#[derive(Default)]
pub struct InMemoryListingStore {
    listings: RwLock<HashMap<ListingId, Listing>>,
}

impl InMemoryListingStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseListingStore for InMemoryListingStore {
    async fn create(&self, payload: SubmissionPayload) -> Result<Listing, StoreError> {
        let now = Utc::now();
        let listing = Listing {
            id: ListingId::new(),
            title: payload.title,
            author: payload.author,
            price: payload.price,
            description: payload.description,
            category: payload.category,
            image: payload.image,
            shipping: Some(payload.shipping),
            created_at: now,
            updated_at: now,
        };

        self.listings.write().await.insert(listing.id, listing.clone());
        info!(listing_id = %listing.id, title = %listing.title, "Listing created");
        Ok(listing)
    }

    async fn update(
        &self,
        id: ListingId,
        payload: SubmissionPayload,
    ) -> Result<Listing, StoreError> {
        let mut listings = self.listings.write().await;
        let Some(listing) = listings.get_mut(&id) else {
            debug!(listing_id = %id, "Update for unknown listing");
            return Err(StoreError::rejected("Listing not found"));
        };

        listing.title = payload.title;
        listing.author = payload.author;
        listing.price = payload.price;
        listing.description = payload.description;
        listing.category = payload.category;
        listing.image = payload.image;
        listing.shipping = Some(payload.shipping);
        listing.updated_at = Utc::now();

        info!(listing_id = %id, "Listing updated");
        Ok(listing.clone())
    }

    async fn get(&self, id: ListingId) -> Result<Option<Listing>, StoreError> {
        Ok(self.listings.read().await.get(&id).cloned())
    }
}

/// Keeps submitted seller applications in memory
#[derive(Default)]
pub struct InMemorySellerRegistry {
    applications: RwLock<Vec<SellerApplication>>,
}

impl InMemorySellerRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseSellerRegistry for InMemorySellerRegistry {
    async fn register(&self, application: SellerApplication) -> Result<(), StoreError> {
        info!(email = %application.email, "Seller application received");
        self.applications.write().await.push(application);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::listings::{Category, ShippingDetails, ShippingMethod};
    use crate::domains::seller_registration::{PhotoKind, SellerField, SellerRegistrationForm};
    use rust_decimal::Decimal;

    fn payload(title: &str) -> SubmissionPayload {
        SubmissionPayload {
            title: title.to_string(),
            author: "Frank Herbert".to_string(),
            price: Decimal::new(125, 1),
            description: "classic".to_string(),
            image: None,
            category: Category::Fiction,
            shipping: ShippingDetails {
                method: ShippingMethod::LocalPickup,
                cost: Decimal::ZERO,
                address: String::new(),
                city: String::new(),
                postal_code: String::new(),
            },
        }
    }

    #[tokio::test]
    async fn create_assigns_id_and_stores_listing() {
        let store = InMemoryListingStore::new();
        let created = store.create(payload("Dune")).await.unwrap();

        let fetched = store.get(created.id).await.unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn update_replaces_fields_and_keeps_id() {
        let store = InMemoryListingStore::new();
        let created = store.create(payload("Dune")).await.unwrap();

        let updated = store
            .update(created.id, payload("Dune Messiah"))
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "Dune Messiah");
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(store.listings.read().await.len(), 1);
    }

    #[tokio::test]
    async fn update_of_unknown_listing_is_rejected() {
        let store = InMemoryListingStore::new();
        let err = store
            .update(ListingId::new(), payload("Dune"))
            .await
            .unwrap_err();

        assert_eq!(err.message(), "Listing not found");
    }

    #[tokio::test]
    async fn registry_keeps_applications_in_arrival_order() {
        let registry = InMemorySellerRegistry::new();
        for email in ["a@example.com", "b@example.com"] {
            let mut form = SellerRegistrationForm::new();
            for field in SellerField::REQUIRED {
                form.set_field(field, "x");
            }
            form.set_field(SellerField::Email, email);
            form.set_photo(PhotoKind::IdCard, Some("file:///id.jpg".to_string()));
            form.set_photo(PhotoKind::Current, Some("file:///me.jpg".to_string()));

            form.submit(&registry).await.unwrap();
        }

        let stored = registry.applications.read().await;
        let emails: Vec<&str> = stored.iter().map(|a| a.email.as_str()).collect();
        assert_eq!(emails, ["a@example.com", "b@example.com"]);
    }
}
