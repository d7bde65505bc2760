pub mod controller;
pub mod errors;
pub mod models;

pub use controller::{FormMode, ListingFormController};
pub use errors::{SubmissionError, ValidationError};
pub use models::*;
