#![allow(dead_code)]

use sellerscope::RawRow;
use serde_json::json;

pub fn profile_row(seller_id: &str, full_name: Option<&str>) -> RawRow {
    let mut row = RawRow::new()
        .set("user_id", json!(seller_id))
        .set("email", json!(format!("{}@example.com", seller_id.to_lowercase())));
    if let Some(name) = full_name {
        row = row.set("full_name", json!(name)).set("location", json!("Lagos"));
    }
    row
}

pub fn vehicle_row(id: &str, seller_id: &str, active: bool) -> RawRow {
    RawRow::new()
        .set("id", json!(id))
        .set("seller_id", json!(seller_id))
        .set("title", json!(format!("Vehicle {}", id)))
        .set("make", json!("Toyota"))
        .set("model", json!("Corolla"))
        .set("year", json!(2018))
        .set("fuel_type", json!("Petrol"))
        .set("price", json!(10500))
        .set("is_active", json!(active))
}

pub fn part_row(id: &str, seller_id: &str, active: bool) -> RawRow {
    RawRow::new()
        .set("id", json!(id))
        .set("seller_id", json!(seller_id))
        .set("title", json!(format!("Part {}", id)))
        .set("category", json!("Brakes"))
        .set("condition", json!("New"))
        .set("price", json!(45))
        .set("is_active", json!(active))
}
