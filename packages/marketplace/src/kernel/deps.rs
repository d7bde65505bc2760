//! Marketplace dependencies for the domains (using traits for testability)
//!
//! Hosts build one `MarketplaceDeps` and hand clones of its collaborators to the
//! form controllers they create. Media pickers are device-bound, so hosts pass
//! them straight to `pick_image`/`pick_photo` instead.

use std::sync::Arc;

use super::{BaseListingStore, BaseSellerRegistry, InMemoryListingStore, InMemorySellerRegistry};

#[derive(Clone)]
pub struct MarketplaceDeps {
    pub listing_store: Arc<dyn BaseListingStore>,
    pub seller_registry: Arc<dyn BaseSellerRegistry>,
}

impl MarketplaceDeps {
    pub fn new(
        listing_store: Arc<dyn BaseListingStore>,
        seller_registry: Arc<dyn BaseSellerRegistry>,
    ) -> Self {
        Self {
            listing_store,
            seller_registry,
        }
    }

    /// Process-local store and registry, empty at start
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryListingStore::new()),
            Arc::new(InMemorySellerRegistry::new()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ListingId;

    #[tokio::test]
    async fn in_memory_deps_start_empty() {
        let deps = MarketplaceDeps::in_memory();

        let missing = deps.listing_store.get(ListingId::new()).await.unwrap();
        assert!(missing.is_none());
    }
}
