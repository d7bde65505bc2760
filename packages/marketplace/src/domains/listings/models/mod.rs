pub mod draft;
pub mod listing;
pub mod payload;

pub use draft::{ListingDraft, ListingField, ShippingDraft, ShippingField};
pub use listing::{Category, Listing, ShippingDetails, ShippingMethod};
pub use payload::SubmissionPayload;
