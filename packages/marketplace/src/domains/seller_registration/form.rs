use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::models::{PhotoKind, RegistrationError, SellerApplication, SellerField};
use crate::kernel::{BaseMediaPicker, BaseSellerRegistry, PickedMedia};

/// Draft of the "Register as Seller" form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SellerRegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub age: String,
    pub email: String,
    pub id_card: String,
    pub passport_number: String,
    pub mobile_number: String,
    pub nationality: String,
    pub gender: String,
    pub address: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
    pub id_card_photo: Option<String>,
    pub current_photo: Option<String>,
}

impl SellerRegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, field: SellerField) -> &str {
        match field {
            SellerField::FirstName => &self.first_name,
            SellerField::LastName => &self.last_name,
            SellerField::Age => &self.age,
            SellerField::Email => &self.email,
            SellerField::IdCard => &self.id_card,
            SellerField::PassportNumber => &self.passport_number,
            SellerField::MobileNumber => &self.mobile_number,
            SellerField::Nationality => &self.nationality,
            SellerField::Gender => &self.gender,
            SellerField::Address => &self.address,
            SellerField::Street => &self.street,
            SellerField::City => &self.city,
            SellerField::State => &self.state,
            SellerField::PostalCode => &self.postal_code,
            SellerField::Country => &self.country,
        }
    }

    pub fn set_field(&mut self, field: SellerField, value: impl Into<String>) {
        let slot = match field {
            SellerField::FirstName => &mut self.first_name,
            SellerField::LastName => &mut self.last_name,
            SellerField::Age => &mut self.age,
            SellerField::Email => &mut self.email,
            SellerField::IdCard => &mut self.id_card,
            SellerField::PassportNumber => &mut self.passport_number,
            SellerField::MobileNumber => &mut self.mobile_number,
            SellerField::Nationality => &mut self.nationality,
            SellerField::Gender => &mut self.gender,
            SellerField::Address => &mut self.address,
            SellerField::Street => &mut self.street,
            SellerField::City => &mut self.city,
            SellerField::State => &mut self.state,
            SellerField::PostalCode => &mut self.postal_code,
            SellerField::Country => &mut self.country,
        };
        *slot = value.into();
    }

    pub fn photo(&self, kind: PhotoKind) -> Option<&str> {
        match kind {
            PhotoKind::IdCard => self.id_card_photo.as_deref(),
            PhotoKind::Current => self.current_photo.as_deref(),
        }
    }

    pub fn set_photo(&mut self, kind: PhotoKind, uri: Option<String>) {
        match kind {
            PhotoKind::IdCard => self.id_card_photo = uri,
            PhotoKind::Current => self.current_photo = uri,
        }
    }

    /// Pick one of the two photos. Cancelling keeps the previous photo.
    pub async fn pick_photo(
        &mut self,
        kind: PhotoKind,
        picker: &dyn BaseMediaPicker,
    ) -> Result<()> {
        if let PickedMedia::Selected(uri) = picker.pick_image().await? {
            self.set_photo(kind, Some(uri));
        }
        Ok(())
    }

    /// Check every required field and photo, reporting all that are missing.
    ///
    /// A value counts as present when it is non-empty; whitespace is not trimmed.
    pub fn validate(&self) -> Result<SellerApplication, RegistrationError> {
        let fields: Vec<SellerField> = SellerField::REQUIRED
            .into_iter()
            .filter(|f| self.field(*f).is_empty())
            .collect();

        let photos: Vec<PhotoKind> = [PhotoKind::IdCard, PhotoKind::Current]
            .into_iter()
            .filter(|k| self.photo(*k).map_or(true, str::is_empty))
            .collect();

        if !fields.is_empty() || !photos.is_empty() {
            return Err(RegistrationError::MissingFields { fields, photos });
        }

        Ok(SellerApplication {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            age: self.age.clone(),
            email: self.email.clone(),
            id_card: non_empty(&self.id_card),
            passport_number: non_empty(&self.passport_number),
            mobile_number: self.mobile_number.clone(),
            nationality: self.nationality.clone(),
            gender: self.gender.clone(),
            address: non_empty(&self.address),
            street: self.street.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            postal_code: self.postal_code.clone(),
            country: self.country.clone(),
            id_card_photo: self.id_card_photo.clone().unwrap_or_default(),
            current_photo: self.current_photo.clone().unwrap_or_default(),
        })
    }

    /// Validate and send the application for review
    pub async fn submit(
        &self,
        registry: &dyn BaseSellerRegistry,
    ) -> Result<SellerApplication, RegistrationError> {
        let application = self.validate().map_err(|e| {
            warn!(error = ?e, "Seller registration incomplete");
            e
        })?;

        registry
            .register(application.clone())
            .await
            .map_err(|e| RegistrationError::RegistryRejected(e.message().to_string()))?;

        info!(email = %application.email, "Seller registration submitted for review");
        Ok(application)
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
