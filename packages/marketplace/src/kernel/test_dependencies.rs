// TestDependencies - mock implementations for testing
//
// Provides mock collaborators that record every call so tests can assert on
// what reached the store, the media picker or the seller registry.

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::{BaseListingStore, BaseMediaPicker, BaseSellerRegistry, PickedMedia, StoreError};
use crate::common::ListingId;
use crate::domains::listings::{Listing, SubmissionPayload};
use crate::domains::seller_registration::SellerApplication;

// =============================================================================
// Mock Listing Store
// =============================================================================

/// A call captured by `MockListingStore`
#[derive(Debug, Clone, PartialEq)]
pub enum StoreCall {
    Create(SubmissionPayload),
    Update(ListingId, SubmissionPayload),
}

pub struct MockListingStore {
    calls: Arc<Mutex<Vec<StoreCall>>>,
    listings: Arc<Mutex<HashMap<ListingId, Listing>>>,
    failure: Arc<Mutex<Option<String>>>,
}

impl MockListingStore {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            listings: Arc::new(Mutex::new(HashMap::new())),
            failure: Arc::new(Mutex::new(None)),
        }
    }

    /// Make every subsequent create/update fail with `message`
    pub fn failing_with(self, message: &str) -> Self {
        *self.failure.lock().unwrap() = Some(message.to_string());
        self
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn was_contacted(&self) -> bool {
        !self.calls.lock().unwrap().is_empty()
    }

    fn respond(&self, id: ListingId, payload: SubmissionPayload) -> Result<Listing, StoreError> {
        if let Some(message) = self.failure.lock().unwrap().clone() {
            return Err(StoreError::Rejected(message));
        }

        let now = Utc::now();
        let listing = Listing {
            id,
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
        self.listings.lock().unwrap().insert(id, listing.clone());
        Ok(listing)
    }
}

impl Default for MockListingStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseListingStore for MockListingStore {
    async fn create(&self, payload: SubmissionPayload) -> Result<Listing, StoreError> {
        self.calls
            .lock()
            .unwrap()
            .push(StoreCall::Create(payload.clone()));
        self.respond(ListingId::new(), payload)
    }

    async fn update(
        &self,
        id: ListingId,
        payload: SubmissionPayload,
    ) -> Result<Listing, StoreError> {
        self.calls
            .lock()
            .unwrap()
            .push(StoreCall::Update(id, payload.clone()));
        self.respond(id, payload)
    }

    /// Returns whatever this mock last answered for `id`
    async fn get(&self, id: ListingId) -> Result<Option<Listing>, StoreError> {
        Ok(self.listings.lock().unwrap().get(&id).cloned())
    }
}

// =============================================================================
// Mock Media Picker
// =============================================================================

pub struct MockMediaPicker {
    responses: Arc<Mutex<Vec<PickedMedia>>>,
    pick_count: Arc<Mutex<usize>>,
}

impl MockMediaPicker {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            pick_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Queue an image the user "selects"
    pub fn with_selection(self, uri: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push(PickedMedia::Selected(uri.to_string()));
        self
    }

    /// Queue a cancelled pick
    pub fn with_cancel(self) -> Self {
        self.responses.lock().unwrap().push(PickedMedia::Cancelled);
        self
    }

    pub fn pick_count(&self) -> usize {
        *self.pick_count.lock().unwrap()
    }
}

impl Default for MockMediaPicker {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseMediaPicker for MockMediaPicker {
    async fn pick_image(&self) -> Result<PickedMedia> {
        *self.pick_count.lock().unwrap() += 1;

        // Unprimed pickers behave like a user closing the library
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Ok(PickedMedia::Cancelled)
        } else {
            Ok(responses.remove(0))
        }
    }
}

// =============================================================================
// Mock Seller Registry
// =============================================================================

pub struct MockSellerRegistry {
    registered: Arc<Mutex<Vec<SellerApplication>>>,
    failure: Option<String>,
}

impl MockSellerRegistry {
    pub fn new() -> Self {
        Self {
            registered: Arc::new(Mutex::new(Vec::new())),
            failure: None,
        }
    }

    pub fn failing_with(mut self, message: &str) -> Self {
        self.failure = Some(message.to_string());
        self
    }

    pub fn registered(&self) -> Vec<SellerApplication> {
        self.registered.lock().unwrap().clone()
    }
}

impl Default for MockSellerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseSellerRegistry for MockSellerRegistry {
    async fn register(&self, application: SellerApplication) -> Result<(), StoreError> {
        if let Some(message) = &self.failure {
            return Err(StoreError::Rejected(message.clone()));
        }
        self.registered.lock().unwrap().push(application);
        Ok(())
    }
}
