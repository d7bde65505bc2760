//! Typed ID definitions for marketplace entities.

pub use super::id::Id;

/// Marker type for persisted book listings.
pub struct ListingRecord;

/// Marker type for support chat messages.
pub struct SupportMessage;

/// Typed ID for persisted listings.
pub type ListingId = Id<ListingRecord>;

/// Typed ID for support chat messages.
pub type MessageId = Id<SupportMessage>;
