use crate::core::aggregator::ProfileAggregator;
use crate::core::{ListingStore, SellerAggregate};
use crate::utils::error::Result;

/// Presentation state of the seller view. `Loaded`, `Empty` and `Failed` are
/// terminal until the view is opened again.
#[derive(Debug, Clone, PartialEq)]
pub enum UiState {
    Closed,
    Loading,
    Loaded(SellerAggregate),
    Empty,
    Failed(String),
}

/// Handed out by `begin_open`; a settle only applies while its ticket is
/// still the view's current epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenTicket {
    epoch: u64,
}

/// The seller-profile view model. Opening it triggers one aggregation cycle;
/// opening again before the previous cycle settles cancels the older cycle,
/// so a slow stale fetch can never overwrite a fresher one.
pub struct SellerView<S: ListingStore> {
    aggregator: ProfileAggregator<S>,
    state: UiState,
    epoch: u64,
}

impl<S: ListingStore> SellerView<S> {
    pub fn new(aggregator: ProfileAggregator<S>) -> Self {
        Self {
            aggregator,
            state: UiState::Closed,
            epoch: 0,
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// Enters `Loading` synchronously and mints the ticket the eventual
    /// settle must present.
    pub fn begin_open(&mut self) -> OpenTicket {
        self.epoch += 1;
        self.state = UiState::Loading;
        OpenTicket { epoch: self.epoch }
    }

    /// Applies an aggregation outcome. Returns false (leaving the state
    /// untouched) when the ticket is stale, i.e. the view was re-opened or
    /// closed after this cycle started.
    pub fn settle(&mut self, ticket: OpenTicket, outcome: Result<SellerAggregate>) -> bool {
        if ticket.epoch != self.epoch {
            tracing::debug!("Dropping stale aggregation result (epoch {})", ticket.epoch);
            return false;
        }
        self.state = match outcome {
            Ok(aggregate) => {
                if !aggregate.has_listings() && aggregate.profile.is_blank() {
                    UiState::Empty
                } else {
                    UiState::Loaded(aggregate)
                }
            }
            Err(e) => {
                tracing::warn!("Seller aggregation failed: {}", e);
                UiState::Failed(e.user_friendly_message())
            }
        };
        true
    }

    /// One full open-fetch-settle cycle.
    pub async fn open(&mut self, seller_id: &str) -> &UiState {
        let ticket = self.begin_open();
        let outcome = self.aggregator.aggregate(seller_id).await;
        self.settle(ticket, outcome);
        &self.state
    }

    /// Discards the current aggregate and cancels any cycle still in flight.
    pub fn close(&mut self) {
        self.epoch += 1;
        self.state = UiState::Closed;
    }
}
