use sellerscope::{ProfileAggregator, SellerView, StaticListingStore, UiState};

mod common;
use common::{profile_row, vehicle_row};

fn seeded_view() -> SellerView<StaticListingStore> {
    let store = StaticListingStore::new()
        .with_profile(profile_row("S1", Some("Sam Dealer")))
        .with_vehicle(vehicle_row("car-1", "S1", true));
    SellerView::new(ProfileAggregator::new(store))
}

#[tokio::test]
async fn test_open_reaches_loaded_for_known_seller() {
    let mut view = seeded_view();

    match view.open("S1").await {
        UiState::Loaded(aggregate) => {
            assert_eq!(aggregate.profile.seller_id, "S1");
            assert_eq!(aggregate.vehicles.len(), 1);
        }
        other => panic!("expected Loaded, got {:?}", other),
    }
}

#[tokio::test]
async fn test_open_reaches_failed_for_ghost_seller() {
    let mut view = seeded_view();
    assert!(matches!(view.open("ghost").await, UiState::Failed(_)));
}

#[tokio::test]
async fn test_blank_profile_without_listings_reaches_empty() {
    // Profile row with nothing beyond the contact email.
    let store = StaticListingStore::new().with_profile(profile_row("S9", None));
    let mut view = SellerView::new(ProfileAggregator::new(store));

    assert_eq!(*view.open("S9").await, UiState::Empty);
}

#[tokio::test]
async fn test_profile_with_content_but_no_listings_is_loaded() {
    let store = StaticListingStore::new().with_profile(profile_row("S1", Some("Sam Dealer")));
    let mut view = SellerView::new(ProfileAggregator::new(store));

    match view.open("S1").await {
        UiState::Loaded(aggregate) => assert!(!aggregate.has_listings()),
        other => panic!("expected Loaded, got {:?}", other),
    }
}

#[tokio::test]
async fn test_reopen_after_failure_can_succeed() {
    let mut view = seeded_view();

    assert!(matches!(view.open("ghost").await, UiState::Failed(_)));
    assert!(matches!(view.open("S1").await, UiState::Loaded(_)));
}

#[tokio::test]
async fn test_stale_settle_does_not_overwrite_fresh_open() {
    let store = StaticListingStore::new()
        .with_profile(profile_row("S1", Some("Sam Dealer")))
        .with_vehicle(vehicle_row("car-1", "S1", true));
    let aggregator = ProfileAggregator::new(store.clone());
    let mut view = SellerView::new(ProfileAggregator::new(store));

    // First open is still in flight when the second one starts.
    let stale_ticket = view.begin_open();
    let stale_outcome = aggregator.aggregate("ghost").await;
    let fresh_ticket = view.begin_open();

    assert!(!view.settle(stale_ticket, stale_outcome));
    assert_eq!(*view.state(), UiState::Loading);

    let fresh_outcome = aggregator.aggregate("S1").await;
    assert!(view.settle(fresh_ticket, fresh_outcome));
    assert!(matches!(view.state(), UiState::Loaded(_)));
}

#[tokio::test]
async fn test_close_discards_aggregate() {
    let mut view = seeded_view();
    view.open("S1").await;
    view.close();
    assert_eq!(*view.state(), UiState::Closed);
}
