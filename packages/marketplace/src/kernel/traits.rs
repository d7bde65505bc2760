// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Validation and draft handling live in the domains and call through these traits.
//
// Naming convention: Base* for trait names (e.g., BaseListingStore, BaseMediaPicker)

use anyhow::Result;
use async_trait::async_trait;
use thiserror::Error;

use crate::common::ListingId;
use crate::domains::listings::{Listing, SubmissionPayload};
use crate::domains::seller_registration::SellerApplication;

/// Failure reported by a persistence collaborator, carrying its message verbatim
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("{0}")]
    Rejected(String),
}

impl StoreError {
    pub fn rejected(message: impl Into<String>) -> Self {
        StoreError::Rejected(message.into())
    }

    pub fn message(&self) -> &str {
        match self {
            StoreError::Rejected(message) => message,
        }
    }
}

// =============================================================================
// Listing Store Trait (Infrastructure - persistence for book listings)
// =============================================================================

#[async_trait]
pub trait BaseListingStore: Send + Sync {
    /// Persist a new listing and return it with its assigned id
    async fn create(&self, payload: SubmissionPayload) -> Result<Listing, StoreError>;

    /// Replace the fields of an existing listing
    async fn update(&self, id: ListingId, payload: SubmissionPayload)
        -> Result<Listing, StoreError>;

    /// Fetch a listing by id
    async fn get(&self, id: ListingId) -> Result<Option<Listing>, StoreError>;
}

// =============================================================================
// Media Picker Trait (Infrastructure - device photo library)
// =============================================================================

/// Outcome of a photo library pick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickedMedia {
    /// Opaque URI of the chosen image, stored verbatim
    Selected(String),
    Cancelled,
}

#[async_trait]
pub trait BaseMediaPicker: Send + Sync {
    /// Ask the user to choose an image
    async fn pick_image(&self) -> Result<PickedMedia>;
}

// =============================================================================
// Seller Registry Trait (Infrastructure - seller applications)
// =============================================================================

#[async_trait]
pub trait BaseSellerRegistry: Send + Sync {
    /// Submit a seller application for review
    async fn register(&self, application: SellerApplication) -> Result<(), StoreError>;
}
