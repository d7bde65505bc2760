use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Text fields on the seller registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SellerField {
    FirstName,
    LastName,
    Age,
    Email,
    IdCard,
    PassportNumber,
    MobileNumber,
    Nationality,
    Gender,
    Address,
    Street,
    City,
    State,
    PostalCode,
    Country,
}

impl SellerField {
    /// Fields that must be filled before an application can be sent
    pub const REQUIRED: [SellerField; 12] = [
        SellerField::FirstName,
        SellerField::LastName,
        SellerField::Age,
        SellerField::Email,
        SellerField::MobileNumber,
        SellerField::Nationality,
        SellerField::Gender,
        SellerField::Street,
        SellerField::City,
        SellerField::State,
        SellerField::PostalCode,
        SellerField::Country,
    ];

    pub fn is_required(&self) -> bool {
        Self::REQUIRED.contains(self)
    }

    pub fn label(&self) -> &'static str {
        match self {
            SellerField::FirstName => "first name",
            SellerField::LastName => "last name",
            SellerField::Age => "age",
            SellerField::Email => "email",
            SellerField::IdCard => "ID card number",
            SellerField::PassportNumber => "passport number",
            SellerField::MobileNumber => "mobile number",
            SellerField::Nationality => "nationality",
            SellerField::Gender => "gender",
            SellerField::Address => "address",
            SellerField::Street => "street",
            SellerField::City => "city",
            SellerField::State => "state/province",
            SellerField::PostalCode => "postal code",
            SellerField::Country => "country",
        }
    }
}

impl std::fmt::Display for SellerField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The two photos a seller must upload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PhotoKind {
    IdCard,
    Current,
}

impl std::fmt::Display for PhotoKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PhotoKind::IdCard => write!(f, "ID card photo"),
            PhotoKind::Current => write!(f, "current photo"),
        }
    }
}

/// Seller application that passed validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerApplication {
    pub first_name: String,
    pub last_name: String,
    pub age: String,
    pub email: String,
    pub id_card: Option<String>,
    pub passport_number: Option<String>,
    pub mobile_number: String,
    pub nationality: String,
    pub gender: String,
    pub address: Option<String>,
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
    pub id_card_photo: String,
    pub current_photo: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("Please fill in all required fields and upload both photos")]
    MissingFields {
        fields: Vec<SellerField>,
        photos: Vec<PhotoKind>,
    },

    #[error("Failed to submit registration: {0}")]
    RegistryRejected(String),
}
