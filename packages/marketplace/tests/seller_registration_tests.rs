//! Seller registration form: required-field reporting and submission.

use marketplace_core::domains::seller_registration::{
    PhotoKind, RegistrationError, SellerField, SellerRegistrationForm,
};
use marketplace_core::kernel::{MockMediaPicker, MockSellerRegistry};

fn complete_form() -> SellerRegistrationForm {
    let mut form = SellerRegistrationForm::new();
    for field in SellerField::REQUIRED {
        form.set_field(field, format!("{} value", field.label()));
    }
    form.set_field(SellerField::Email, "reader@example.org");
    form.set_photo(PhotoKind::IdCard, Some("file:///id.jpg".to_string()));
    form.set_photo(PhotoKind::Current, Some("file:///me.jpg".to_string()));
    form
}

#[test]
fn complete_form_validates_without_optional_fields() {
    let application = complete_form().validate().unwrap();

    assert_eq!(application.email, "reader@example.org");
    assert_eq!(application.id_card, None);
    assert_eq!(application.passport_number, None);
    assert_eq!(application.address, None);
    assert_eq!(application.current_photo, "file:///me.jpg");
}

#[test]
fn optional_fields_are_carried_when_present() {
    let mut form = complete_form();
    form.set_field(SellerField::PassportNumber, "X1234567");

    let application = form.validate().unwrap();
    assert_eq!(application.passport_number.as_deref(), Some("X1234567"));
}

#[test]
fn all_missing_items_are_reported_together() {
    let mut form = complete_form();
    form.set_field(SellerField::LastName, "");
    form.set_field(SellerField::Country, "");
    form.set_photo(PhotoKind::Current, None);

    let err = form.validate().unwrap_err();
    assert_eq!(
        err,
        RegistrationError::MissingFields {
            fields: vec![SellerField::LastName, SellerField::Country],
            photos: vec![PhotoKind::Current],
        }
    );
    assert_eq!(
        err.to_string(),
        "Please fill in all required fields and upload both photos"
    );
}

#[tokio::test]
async fn submit_registers_valid_application() {
    let registry = MockSellerRegistry::new();
    let application = complete_form().submit(&registry).await.unwrap();

    assert_eq!(registry.registered(), vec![application]);
}

#[tokio::test]
async fn incomplete_form_is_not_sent() {
    let registry = MockSellerRegistry::new();
    let result = SellerRegistrationForm::new().submit(&registry).await;

    assert!(matches!(result, Err(RegistrationError::MissingFields { .. })));
    assert!(registry.registered().is_empty());
}

#[tokio::test]
async fn registry_failure_is_reported() {
    let registry = MockSellerRegistry::new().failing_with("Service unavailable");
    let err = complete_form().submit(&registry).await.unwrap_err();

    assert_eq!(
        err,
        RegistrationError::RegistryRejected("Service unavailable".to_string())
    );
}

#[tokio::test]
async fn photos_come_from_the_media_picker() {
    let picker = MockMediaPicker::new()
        .with_selection("content://id-card")
        .with_cancel();
    let mut form = SellerRegistrationForm::new();

    form.pick_photo(PhotoKind::IdCard, &picker).await.unwrap();
    form.pick_photo(PhotoKind::Current, &picker).await.unwrap();

    assert_eq!(form.photo(PhotoKind::IdCard), Some("content://id-card"));
    assert_eq!(form.photo(PhotoKind::Current), None);
}
