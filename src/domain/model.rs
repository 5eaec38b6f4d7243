use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::utils::error::{FetchError, Result};

/// Listing sequences in an aggregate never exceed this many entries per kind.
pub const MAX_LISTINGS_PER_KIND: usize = 5;

/// A loosely-typed record as returned by the backend collaborator.
/// Typed entities are only ever produced from rows through the validating
/// decoders below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRow {
    pub data: HashMap<String, Value>,
}

impl RawRow {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }

    pub fn set(mut self, key: &str, value: Value) -> Self {
        self.data.insert(key.to_string(), value);
        self
    }
}

impl Default for RawRow {
    fn default() -> Self {
        Self::new()
    }
}

fn required_str(row: &RawRow, entity: &'static str, field: &str) -> Result<String> {
    match row.data.get(field) {
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(s.clone()),
        Some(_) => Err(FetchError::MalformedRow {
            entity,
            reason: format!("field '{}' is not a usable string", field),
        }),
        None => Err(FetchError::MalformedRow {
            entity,
            reason: format!("missing required field '{}'", field),
        }),
    }
}

fn optional_str(row: &RawRow, entity: &'static str, field: &str) -> Result<Option<String>> {
    match row.data.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(FetchError::MalformedRow {
            entity,
            reason: format!("field '{}' is not a string", field),
        }),
    }
}

fn optional_i32(row: &RawRow, entity: &'static str, field: &str) -> Result<Option<i32>> {
    match row.data.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => v
            .as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .map(Some)
            .ok_or_else(|| FetchError::MalformedRow {
                entity,
                reason: format!("field '{}' is not a valid integer", field),
            }),
    }
}

fn optional_timestamp(
    row: &RawRow,
    entity: &'static str,
    field: &str,
) -> Result<Option<DateTime<Utc>>> {
    match row.data.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => DateTime::parse_from_rfc3339(s)
            .map(|dt| Some(dt.with_timezone(&Utc)))
            .map_err(|e| FetchError::MalformedRow {
                entity,
                reason: format!("field '{}' is not an RFC 3339 timestamp: {}", field, e),
            }),
        Some(_) => Err(FetchError::MalformedRow {
            entity,
            reason: format!("field '{}' is not a timestamp string", field),
        }),
    }
}

/// A seller's public profile. Immutable once decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct SellerProfile {
    pub seller_id: String,
    pub email: String,
    pub full_name: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub phone: Option<String>,
    pub avatar_url: Option<String>,
}

impl SellerProfile {
    pub fn from_row(row: &RawRow) -> Result<Self> {
        const ENTITY: &str = "profile";
        Ok(Self {
            seller_id: required_str(row, ENTITY, "user_id")?,
            email: required_str(row, ENTITY, "email")?,
            full_name: optional_str(row, ENTITY, "full_name")?,
            bio: optional_str(row, ENTITY, "bio")?,
            location: optional_str(row, ENTITY, "location")?,
            phone: optional_str(row, ENTITY, "phone")?,
            avatar_url: optional_str(row, ENTITY, "avatar_url")?,
        })
    }

    /// True when the profile carries nothing worth showing beyond the
    /// contact email. Gates the Empty presentation state together with two
    /// empty listing sequences.
    pub fn is_blank(&self) -> bool {
        self.full_name.is_none()
            && self.bio.is_none()
            && self.location.is_none()
            && self.phone.is_none()
            && self.avatar_url.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingKind {
    Vehicle,
    Part,
}

impl ListingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingKind::Vehicle => "vehicle",
            ListingKind::Part => "part",
        }
    }
}

/// Kind-specific listing attributes, as the two backend collections shape them.
#[derive(Debug, Clone, PartialEq)]
pub enum ListingDetails {
    Vehicle {
        make: Option<String>,
        model: Option<String>,
        year: Option<i32>,
        fuel_type: Option<String>,
    },
    Part {
        category: Option<String>,
        condition: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListingSummary {
    pub id: String,
    pub seller_id: String,
    pub title: String,
    pub price: f64,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub details: ListingDetails,
}

impl ListingSummary {
    pub fn kind(&self) -> ListingKind {
        match self.details {
            ListingDetails::Vehicle { .. } => ListingKind::Vehicle,
            ListingDetails::Part { .. } => ListingKind::Part,
        }
    }

    pub fn from_row(kind: ListingKind, row: &RawRow) -> Result<Self> {
        let entity = kind.as_str();

        let price = match row.data.get("price").and_then(Value::as_f64) {
            Some(p) if p >= 0.0 => p,
            _ => {
                return Err(FetchError::MalformedRow {
                    entity,
                    reason: "field 'price' is not a non-negative number".to_string(),
                })
            }
        };

        // A row that does not explicitly flag itself active is not eligible
        // for display.
        let is_active = row
            .data
            .get("is_active")
            .and_then(Value::as_bool)
            .unwrap_or(false);

        let details = match kind {
            ListingKind::Vehicle => ListingDetails::Vehicle {
                make: optional_str(row, entity, "make")?,
                model: optional_str(row, entity, "model")?,
                year: optional_i32(row, entity, "year")?,
                fuel_type: optional_str(row, entity, "fuel_type")?,
            },
            ListingKind::Part => ListingDetails::Part {
                category: optional_str(row, entity, "category")?,
                condition: optional_str(row, entity, "condition")?,
            },
        };

        Ok(Self {
            id: required_str(row, entity, "id")?,
            seller_id: required_str(row, entity, "seller_id")?,
            title: required_str(row, entity, "title")?,
            price,
            image_url: optional_str(row, entity, "image_url")?,
            is_active,
            created_at: optional_timestamp(row, entity, "created_at")?,
            details,
        })
    }
}

/// The merged profile-plus-listings view model for one seller. Built fresh
/// per aggregation call and never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct SellerAggregate {
    pub profile: SellerProfile,
    pub vehicles: Vec<ListingSummary>,
    pub parts: Vec<ListingSummary>,
}

impl SellerAggregate {
    pub fn has_listings(&self) -> bool {
        !self.vehicles.is_empty() || !self.parts.is_empty()
    }
}
