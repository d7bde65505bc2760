use thiserror::Error;

use super::models::{ListingField, ShippingField};

/// Local validation failures. These never reach the listing store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all required fields")]
    MissingRequiredField(ListingField),

    #[error("Please fill in all shipping information")]
    MissingShippingInfo(ShippingField),

    #[error("Please enter a valid number for {field} (got {value:?})")]
    InvalidNumber { field: ListingField, value: String },
}

/// Errors returned by `ListingFormController::submit`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    StoreRejected(String),
}
