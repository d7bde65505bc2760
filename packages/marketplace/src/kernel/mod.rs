//! Kernel module - infrastructure traits and their implementations.

pub mod deps;
pub mod memory_store;
pub mod test_dependencies;
pub mod traits;

pub use deps::MarketplaceDeps;
pub use memory_store::{InMemoryListingStore, InMemorySellerRegistry};
pub use test_dependencies::{MockListingStore, MockMediaPicker, MockSellerRegistry, StoreCall};
pub use traits::*;
