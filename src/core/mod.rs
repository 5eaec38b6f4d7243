pub mod aggregator;
pub mod render;
pub mod view;

pub use crate::domain::model::{
    ListingKind, ListingSummary, RawRow, SellerAggregate, SellerProfile,
};
pub use crate::domain::ports::{ConfigProvider, ListingStore};
pub use crate::utils::error::Result;
