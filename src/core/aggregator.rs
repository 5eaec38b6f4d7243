use crate::core::{ListingKind, ListingStore, ListingSummary, RawRow, SellerAggregate};
use crate::domain::model::{SellerProfile, MAX_LISTINGS_PER_KIND};
use crate::utils::error::{FetchError, Result};
use crate::utils::validation;

/// Fetches a seller's profile and active listings and merges them into one
/// `SellerAggregate`. The three backend reads run concurrently and the call
/// succeeds only if all of them do; there is no partial result, no caching
/// and no retry.
pub struct ProfileAggregator<S: ListingStore> {
    store: S,
    limit: usize,
}

impl<S: ListingStore> ProfileAggregator<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            limit: MAX_LISTINGS_PER_KIND,
        }
    }

    /// Limits below the default shrink the listing sequences; anything above
    /// is clamped back to `MAX_LISTINGS_PER_KIND`.
    pub fn with_limit(store: S, limit: usize) -> Self {
        Self {
            store,
            limit: limit.min(MAX_LISTINGS_PER_KIND),
        }
    }

    pub async fn aggregate(&self, seller_id: &str) -> Result<SellerAggregate> {
        validation::validate_non_empty_string("seller_id", seller_id)?;

        tracing::debug!("Fetching profile and listings for seller {}", seller_id);

        // First failure aborts the join; completion otherwise waits on all
        // three reads, so latency is bounded by the slowest one.
        let (profile_rows, vehicle_rows, part_rows) = tokio::try_join!(
            self.store.profile_rows(seller_id),
            self.store
                .active_listings(ListingKind::Vehicle, seller_id, self.limit),
            self.store
                .active_listings(ListingKind::Part, seller_id, self.limit),
        )?;

        if profile_rows.len() != 1 {
            tracing::warn!(
                "Seller {} resolved to {} profile rows",
                seller_id,
                profile_rows.len()
            );
            return Err(FetchError::NotFound {
                seller_id: seller_id.to_string(),
                rows: profile_rows.len(),
            });
        }
        let profile = SellerProfile::from_row(&profile_rows[0])?;

        let vehicles = self.decode_listings(ListingKind::Vehicle, &vehicle_rows)?;
        let parts = self.decode_listings(ListingKind::Part, &part_rows)?;

        tracing::debug!(
            "Aggregated seller {}: {} vehicles, {} parts",
            seller_id,
            vehicles.len(),
            parts.len()
        );

        Ok(SellerAggregate {
            profile,
            vehicles,
            parts,
        })
    }

    fn decode_listings(&self, kind: ListingKind, rows: &[RawRow]) -> Result<Vec<ListingSummary>> {
        let mut listings = Vec::with_capacity(rows.len().min(self.limit));
        for row in rows {
            let listing = ListingSummary::from_row(kind, row)?;
            // The store already filters inactive rows; rows that slip
            // through anyway are dropped rather than shown.
            if !listing.is_active {
                continue;
            }
            if listings.len() == self.limit {
                break;
            }
            listings.push(listing);
        }
        Ok(listings)
    }
}
