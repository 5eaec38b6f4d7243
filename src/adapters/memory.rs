use crate::core::{ListingKind, ListingStore, RawRow};
use crate::utils::error::{FetchError, Result};
use async_trait::async_trait;
use serde_json::{json, Value};

/// In-memory `ListingStore` over fixture rows. Backs the CLI's offline
/// sample mode and the test suites; reads can be poisoned to simulate a
/// failing backend.
#[derive(Debug, Clone, Default)]
pub struct StaticListingStore {
    profiles: Vec<RawRow>,
    vehicles: Vec<RawRow>,
    parts: Vec<RawRow>,
    fail_profiles: bool,
    fail_vehicles: bool,
    fail_parts: bool,
}

impl StaticListingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(mut self, row: RawRow) -> Self {
        self.profiles.push(row);
        self
    }

    pub fn with_vehicle(mut self, row: RawRow) -> Self {
        self.vehicles.push(row);
        self
    }

    pub fn with_part(mut self, row: RawRow) -> Self {
        self.parts.push(row);
        self
    }

    pub fn fail_profiles(mut self) -> Self {
        self.fail_profiles = true;
        self
    }

    pub fn fail_listings(mut self, kind: ListingKind) -> Self {
        match kind {
            ListingKind::Vehicle => self.fail_vehicles = true,
            ListingKind::Part => self.fail_parts = true,
        }
        self
    }

    /// The demo data set used when the CLI runs with `--sample`.
    pub fn sample() -> Self {
        let mut store = Self::new().with_profile(
            RawRow::new()
                .set("user_id", json!("S1"))
                .set("email", json!("sam@wheelhouse.example"))
                .set("full_name", json!("Sam Okafor"))
                .set("bio", json!("Family-run dealership since 2009"))
                .set("location", json!("Lagos"))
                .set("phone", json!("+234 801 555 0101")),
        );

        let cars = [
            ("car-1", "Toyota Corolla 2018", "Toyota", "Corolla", 2018, "Petrol", 10500),
            ("car-2", "Honda Civic 2020", "Honda", "Civic", 2020, "Petrol", 15800),
            ("car-3", "Hyundai Kona EV", "Hyundai", "Kona", 2022, "Electric", 24300),
        ];
        for (id, title, make, model, year, fuel, price) in cars {
            store = store.with_vehicle(
                RawRow::new()
                    .set("id", json!(id))
                    .set("seller_id", json!("S1"))
                    .set("title", json!(title))
                    .set("make", json!(make))
                    .set("model", json!(model))
                    .set("year", json!(year))
                    .set("fuel_type", json!(fuel))
                    .set("price", json!(price))
                    .set("is_active", json!(true))
                    .set("created_at", json!("2025-06-12T09:30:00Z")),
            );
        }

        let parts = [
            ("part-1", "Brake pad set", "Brakes", "New", 45),
            ("part-2", "Alternator, refurbished", "Electrical", "Used", 120),
        ];
        for (id, title, category, condition, price) in parts {
            store = store.with_part(
                RawRow::new()
                    .set("id", json!(id))
                    .set("seller_id", json!("S1"))
                    .set("title", json!(title))
                    .set("category", json!(category))
                    .set("condition", json!(condition))
                    .set("price", json!(price))
                    .set("is_active", json!(true))
                    .set("created_at", json!("2025-07-03T14:00:00Z")),
            );
        }

        store
    }

    fn matches_str(row: &RawRow, field: &str, expected: &str) -> bool {
        row.data.get(field).and_then(Value::as_str) == Some(expected)
    }

    fn is_active(row: &RawRow) -> bool {
        row.data
            .get("is_active")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    fn poisoned(which: &'static str) -> FetchError {
        FetchError::MalformedRow {
            entity: which,
            reason: "simulated backend failure".to_string(),
        }
    }
}

#[async_trait]
impl ListingStore for StaticListingStore {
    async fn profile_rows(&self, seller_id: &str) -> Result<Vec<RawRow>> {
        if self.fail_profiles {
            return Err(Self::poisoned("profile"));
        }
        Ok(self
            .profiles
            .iter()
            .filter(|row| Self::matches_str(row, "user_id", seller_id))
            .cloned()
            .collect())
    }

    async fn active_listings(
        &self,
        kind: ListingKind,
        seller_id: &str,
        limit: usize,
    ) -> Result<Vec<RawRow>> {
        let (rows, failed) = match kind {
            ListingKind::Vehicle => (&self.vehicles, self.fail_vehicles),
            ListingKind::Part => (&self.parts, self.fail_parts),
        };
        if failed {
            return Err(Self::poisoned(kind.as_str()));
        }
        Ok(rows
            .iter()
            .filter(|row| Self::matches_str(row, "seller_id", seller_id) && Self::is_active(row))
            .take(limit)
            .cloned()
            .collect())
    }
}
