use sellerscope::{FetchError, ListingKind, ProfileAggregator, StaticListingStore};

mod common;
use common::{part_row, profile_row, vehicle_row};

fn store_with_counts(vehicles: usize, parts: usize) -> StaticListingStore {
    let mut store = StaticListingStore::new().with_profile(profile_row("S1", Some("Sam Dealer")));
    for i in 0..vehicles {
        store = store.with_vehicle(vehicle_row(&format!("car-{}", i), "S1", true));
    }
    for i in 0..parts {
        store = store.with_part(part_row(&format!("part-{}", i), "S1", true));
    }
    store
}

#[tokio::test]
async fn test_aggregate_preserves_listing_counts_below_cap() {
    let aggregator = ProfileAggregator::new(store_with_counts(3, 2));
    let aggregate = aggregator.aggregate("S1").await.unwrap();

    assert_eq!(aggregate.profile.full_name.as_deref(), Some("Sam Dealer"));
    assert_eq!(aggregate.vehicles.len(), 3);
    assert_eq!(aggregate.parts.len(), 2);
}

#[tokio::test]
async fn test_aggregate_truncates_each_kind_at_five() {
    let aggregator = ProfileAggregator::new(store_with_counts(8, 7));
    let aggregate = aggregator.aggregate("S1").await.unwrap();

    assert_eq!(aggregate.vehicles.len(), 5);
    assert_eq!(aggregate.parts.len(), 5);
}

#[tokio::test]
async fn test_inactive_vehicles_are_excluded() {
    // Three active and two inactive vehicles, no parts.
    let store = StaticListingStore::new()
        .with_profile(profile_row("S1", Some("Sam Dealer")))
        .with_vehicle(vehicle_row("car-1", "S1", true))
        .with_vehicle(vehicle_row("car-2", "S1", true))
        .with_vehicle(vehicle_row("car-3", "S1", true))
        .with_vehicle(vehicle_row("car-4", "S1", false))
        .with_vehicle(vehicle_row("car-5", "S1", false));

    let aggregate = ProfileAggregator::new(store).aggregate("S1").await.unwrap();
    assert_eq!(aggregate.vehicles.len(), 3);
    assert_eq!(aggregate.parts.len(), 0);
}

#[tokio::test]
async fn test_missing_profile_fails_with_not_found() {
    let store = StaticListingStore::new().with_vehicle(vehicle_row("car-1", "ghost", true));

    let err = ProfileAggregator::new(store)
        .aggregate("ghost")
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::NotFound { rows: 0, .. }));
}

#[tokio::test]
async fn test_duplicate_profile_rows_fail_regardless_of_listings() {
    let store = StaticListingStore::new()
        .with_profile(profile_row("S1", Some("Sam Dealer")))
        .with_profile(profile_row("S1", Some("Impostor")))
        .with_vehicle(vehicle_row("car-1", "S1", true));

    let err = ProfileAggregator::new(store)
        .aggregate("S1")
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::NotFound { rows: 2, .. }));
}

#[tokio::test]
async fn test_listing_read_failure_aborts_whole_aggregate() {
    let store = store_with_counts(2, 2).fail_listings(ListingKind::Part);

    let result = ProfileAggregator::new(store).aggregate("S1").await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_profile_read_failure_aborts_whole_aggregate() {
    let store = store_with_counts(2, 2).fail_profiles();

    let result = ProfileAggregator::new(store).aggregate("S1").await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_aggregate_is_idempotent_against_unchanged_state() {
    let aggregator = ProfileAggregator::new(store_with_counts(2, 1));

    let first = aggregator.aggregate("S1").await.unwrap();
    let second = aggregator.aggregate("S1").await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_listings_from_other_sellers_are_excluded() {
    let store = StaticListingStore::new()
        .with_profile(profile_row("S1", Some("Sam Dealer")))
        .with_vehicle(vehicle_row("car-1", "S1", true))
        .with_vehicle(vehicle_row("car-2", "S2", true));

    let aggregate = ProfileAggregator::new(store).aggregate("S1").await.unwrap();
    assert_eq!(aggregate.vehicles.len(), 1);
    assert_eq!(aggregate.vehicles[0].id, "car-1");
}
