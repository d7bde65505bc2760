pub mod form;
pub mod models;

pub use form::SellerRegistrationForm;
pub use models::{PhotoKind, RegistrationError, SellerApplication, SellerField};
