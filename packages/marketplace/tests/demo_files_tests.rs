//! The sample files under demos/ must stay loadable by listing_cli.

use marketplace_core::domains::listings::{ListingDraft, ShippingMethod};
use marketplace_core::domains::seller_registration::SellerRegistrationForm;

#[test]
fn dune_draft_parses() {
    let draft: ListingDraft =
        serde_json::from_str(include_str!("../demos/dune_draft.json")).unwrap();

    assert_eq!(draft.price_text, "12.5");
    assert_eq!(draft.shipping.method, ShippingMethod::Standard);
    assert_eq!(draft.shipping.postal_code, "10191");
}

#[test]
fn revision_switches_to_local_pickup() {
    let draft: ListingDraft =
        serde_json::from_str(include_str!("../demos/dune_pickup_revision.json")).unwrap();

    assert_eq!(draft.shipping.method, ShippingMethod::LocalPickup);
}

#[test]
fn seller_form_is_complete() {
    let form: SellerRegistrationForm =
        serde_json::from_str(include_str!("../demos/seller.json")).unwrap();

    assert!(form.validate().is_ok());
    assert!(form.passport_number.is_empty());
}
