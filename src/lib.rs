pub mod adapters;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub mod config;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::http::HttpListingStore;
pub use adapters::memory::StaticListingStore;
pub use crate::core::aggregator::ProfileAggregator;
pub use crate::core::render::render;
pub use crate::core::view::{OpenTicket, SellerView, UiState};
pub use domain::model::{
    ListingDetails, ListingKind, ListingSummary, RawRow, SellerAggregate, SellerProfile,
    MAX_LISTINGS_PER_KIND,
};
pub use domain::ports::{ConfigProvider, ListingStore};
pub use utils::error::{FetchError, Result};
