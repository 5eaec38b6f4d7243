use crate::domain::model::{ListingKind, RawRow};
use crate::utils::error::Result;
use async_trait::async_trait;

/// The backend data-access boundary. Implementations filter listings by
/// seller and active flag and apply the limit; callers still re-check both.
#[async_trait]
pub trait ListingStore: Send + Sync {
    /// All profile rows matching the seller id. The aggregation contract
    /// requires exactly one; the caller enforces that.
    async fn profile_rows(&self, seller_id: &str) -> Result<Vec<RawRow>>;

    /// Active listings of one kind for the seller, at most `limit` rows.
    async fn active_listings(
        &self,
        kind: ListingKind,
        seller_id: &str,
        limit: usize,
    ) -> Result<Vec<RawRow>>;
}

pub trait ConfigProvider: Send + Sync {
    fn backend_url(&self) -> &str;
    fn listing_limit(&self) -> usize;
    fn use_sample_data(&self) -> bool;
}
