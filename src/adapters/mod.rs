// Adapters layer: concrete ListingStore implementations for external systems.

pub mod http;
pub mod memory;
