//! Listing form controller.
//!
//! Owns the draft behind the "Post Book" / "Edit Book" screen. The host screen
//! forwards every edit here, calls `submit` from the submit button and decides
//! on its own where to navigate afterward.

use anyhow::Result;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::errors::{SubmissionError, ValidationError};
use super::models::{
    Category, Listing, ListingDraft, ListingField, ShippingDetails, ShippingField,
    ShippingMethod, SubmissionPayload,
};
use crate::common::ListingId;
use crate::kernel::{BaseListingStore, BaseMediaPicker, PickedMedia};

const REQUIRED_BOOK_FIELDS: [ListingField; 4] = [
    ListingField::Title,
    ListingField::Author,
    ListingField::Price,
    ListingField::Description,
];

const REQUIRED_ADDRESS_FIELDS: [ShippingField; 3] = [
    ShippingField::Address,
    ShippingField::City,
    ShippingField::PostalCode,
];

/// Whether the controller creates a new listing or updates an existing one.
/// Fixed for the lifetime of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Creating,
    Editing(ListingId),
}

pub struct ListingFormController {
    store: Arc<dyn BaseListingStore>,
    mode: FormMode,
    draft: ListingDraft,
}

impl ListingFormController {
    /// Controller for a brand new listing with an empty draft
    pub fn new(store: Arc<dyn BaseListingStore>) -> Self {
        Self {
            store,
            mode: FormMode::Creating,
            draft: ListingDraft::default(),
        }
    }

    /// Controller seeded from `listing`; submissions update that listing
    pub fn for_existing(store: Arc<dyn BaseListingStore>, listing: &Listing) -> Self {
        let mut controller = Self {
            store,
            mode: FormMode::Editing(listing.id),
            draft: ListingDraft::default(),
        };
        controller.load_from_existing(listing);
        controller
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Editing(_))
    }

    pub fn draft(&self) -> &ListingDraft {
        &self.draft
    }

    /// Replace the draft with the fields of `listing`, numbers rendered as text.
    ///
    /// Listings saved without shipping data leave the shipping section at its
    /// defaults. Calling this again with the same listing yields the same draft.
    pub fn load_from_existing(&mut self, listing: &Listing) {
        self.draft = ListingDraft::from(listing);
        debug!(listing_id = %listing.id, "Draft loaded from existing listing");
    }

    pub fn set_field(&mut self, field: ListingField, value: impl Into<String>) {
        *self.draft.text_mut(field) = value.into();
    }

    pub fn set_category(&mut self, category: Category) {
        self.draft.category = category;
    }

    /// Store an image reference exactly as given
    pub fn set_image(&mut self, image: Option<String>) {
        self.draft.image_ref = image;
    }

    /// Let the user choose a cover image. A cancelled pick keeps the current one.
    pub async fn pick_image(&mut self, picker: &dyn BaseMediaPicker) -> Result<()> {
        match picker.pick_image().await? {
            PickedMedia::Selected(uri) => {
                debug!(uri = %uri, "Cover image selected");
                self.draft.image_ref = Some(uri);
            }
            PickedMedia::Cancelled => debug!("Cover image pick cancelled"),
        }
        Ok(())
    }

    pub fn set_shipping_field(&mut self, field: ShippingField, value: impl Into<String>) {
        *self.draft.shipping.text_mut(field) = value.into();
    }

    /// Switch shipping method. Address fields are kept either way so toggling
    /// back and forth does not lose what the user typed.
    pub fn set_shipping_method(&mut self, method: ShippingMethod) {
        debug!(from = %self.draft.shipping.method, to = %method, "Shipping method changed");
        self.draft.shipping.method = method;
    }

    /// Check the draft and build the store payload.
    ///
    /// Reports only the first failure: book fields, then address fields, then
    /// the price number.
    pub fn validate(&self) -> Result<SubmissionPayload, ValidationError> {
        let draft = &self.draft;

        if let Some(field) = REQUIRED_BOOK_FIELDS
            .into_iter()
            .find(|f| draft.text(*f).trim().is_empty())
        {
            return Err(ValidationError::MissingRequiredField(field));
        }

        let shipping = &draft.shipping;
        if shipping.method.requires_address() {
            if let Some(field) = REQUIRED_ADDRESS_FIELDS
                .into_iter()
                .find(|f| shipping.text(*f).trim().is_empty())
            {
                return Err(ValidationError::MissingShippingInfo(field));
            }
        }

        let price =
            parse_amount(&draft.price_text).ok_or_else(|| ValidationError::InvalidNumber {
                field: ListingField::Price,
                value: draft.price_text.clone(),
            })?;

        // Shipping cost is optional: anything unreadable ships for free
        let cost = if shipping.method.requires_address() {
            parse_amount(&shipping.cost_text).unwrap_or(Decimal::ZERO)
        } else {
            Decimal::ZERO
        };

        Ok(SubmissionPayload {
            title: draft.title.clone(),
            author: draft.author.clone(),
            price,
            description: draft.description.clone(),
            image: draft.image_ref.clone(),
            category: draft.category,
            shipping: ShippingDetails {
                method: shipping.method,
                cost,
                address: shipping.address.clone(),
                city: shipping.city.clone(),
                postal_code: shipping.postal_code.clone(),
            },
        })
    }

    /// Validate and hand the payload to the store.
    ///
    /// Validation failures return without contacting the store. Store failures
    /// come back as `StoreRejected` with the store's message; nothing is retried.
    pub async fn submit(&mut self) -> Result<Listing, SubmissionError> {
        let payload = self.validate().map_err(|e| {
            warn!(error = ?e, "Listing draft failed validation");
            e
        })?;

        let result = match self.mode {
            FormMode::Creating => {
                info!(title = %payload.title, "Creating listing");
                self.store.create(payload).await
            }
            FormMode::Editing(id) => {
                info!(listing_id = %id, "Updating listing");
                self.store.update(id, payload).await
            }
        };

        result.map_err(|e| {
            warn!(error = %e, "Listing store rejected submission");
            SubmissionError::StoreRejected(e.message().to_string())
        })
    }
}

/// Plain decimal notation only: no digit separators, no silent rounding
fn parse_amount(text: &str) -> Option<Decimal> {
    let text = text.trim();
    if text.contains('_') {
        return None;
    }
    Decimal::from_str_exact(text).ok()
}
