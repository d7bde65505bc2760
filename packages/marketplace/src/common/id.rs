//! Identifiers for listings and chat messages.
//!
//! Both are UUID v7 values, so ids sort by creation time. The entity marker
//! keeps a listing id from being passed where a message id is expected:
//!
//! ```rust
//! use marketplace_core::common::{ListingId, MessageId};
//!
//! let posted = ListingId::new();
//! let reply = MessageId::new();
//! assert_ne!(posted.to_string(), reply.to_string());
//! ```
//!
//! ```compile_fail
//! use marketplace_core::common::{ListingId, MessageId};
//!
//! let message_id: MessageId = ListingId::new();
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;
use uuid::Uuid;

/// Time-ordered id of an `Entity`; serialized as a bare UUID string
#[derive(Serialize, Deserialize)]
#[serde(transparent, bound = "")]
pub struct Id<Entity> {
    uuid: Uuid,
    #[serde(skip)]
    entity: PhantomData<fn() -> Entity>,
}

impl<Entity> Id<Entity> {
    pub fn new() -> Self {
        Self::from_uuid(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self {
            uuid,
            entity: PhantomData,
        }
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.uuid
    }
}

impl<Entity> Default for Id<Entity> {
    fn default() -> Self {
        Self::new()
    }
}

// Written out by hand: derives would demand the same traits of `Entity`

impl<Entity> Clone for Id<Entity> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Entity> Copy for Id<Entity> {}

impl<Entity> PartialEq for Id<Entity> {
    fn eq(&self, other: &Self) -> bool {
        self.uuid == other.uuid
    }
}

impl<Entity> Eq for Id<Entity> {}

impl<Entity> PartialOrd for Id<Entity> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<Entity> Ord for Id<Entity> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.uuid.cmp(&other.uuid)
    }
}

impl<Entity> Hash for Id<Entity> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.uuid.hash(state);
    }
}

impl<Entity> fmt::Debug for Id<Entity> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entity = std::any::type_name::<Entity>()
            .rsplit("::")
            .next()
            .unwrap_or_default();
        write!(f, "{entity}#{}", self.uuid)
    }
}

impl<Entity> fmt::Display for Id<Entity> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.uuid, f)
    }
}

impl<Entity> FromStr for Id<Entity> {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self::from_uuid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Shelf;

    type ShelfId = Id<Shelf>;

    #[test]
    fn fresh_ids_differ() {
        assert_ne!(ShelfId::new(), ShelfId::new());
    }

    #[test]
    fn display_output_parses_back() {
        let id = ShelfId::new();
        let parsed: ShelfId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn json_form_is_the_plain_uuid() {
        let id = ShelfId::new();
        assert_eq!(serde_json::to_string(&id).unwrap(), format!("\"{id}\""));

        let back: ShelfId = serde_json::from_str(&format!("\"{id}\"")).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn later_ids_sort_after_earlier_ones() {
        let first = ShelfId::new();
        std::thread::sleep(std::time::Duration::from_millis(1));
        let second = ShelfId::new();
        assert!(first < second);
    }

    #[test]
    fn debug_names_the_entity() {
        let id = ShelfId::new();
        assert_eq!(format!("{id:?}"), format!("Shelf#{id}"));
    }
}
