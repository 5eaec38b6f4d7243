use crate::core::view::UiState;
use crate::domain::model::{ListingDetails, ListingSummary, SellerAggregate};

// The rating widget is a static stub until reviews exist in the backend.
const RATING_STUB: &str = "4.8 (24 reviews)";

const LOADING_MESSAGE: &str = "Loading seller information...";
const FAILED_MESSAGE: &str = "Unable to load seller information.";
const NO_LISTINGS_MESSAGE: &str = "This seller currently has no active listings.";

/// Renders a UI state as the text the surrounding application displays.
/// Each state renders distinctly.
pub fn render(state: &UiState) -> String {
    let mut lines = vec!["Seller Profile".to_string(), String::new()];

    match state {
        UiState::Closed => return String::new(),
        UiState::Loading => lines.push(LOADING_MESSAGE.to_string()),
        UiState::Failed(_) => lines.push(FAILED_MESSAGE.to_string()),
        UiState::Empty => lines.push(NO_LISTINGS_MESSAGE.to_string()),
        UiState::Loaded(aggregate) => render_aggregate(&mut lines, aggregate),
    }

    lines.join("\n")
}

fn render_aggregate(lines: &mut Vec<String>, aggregate: &SellerAggregate) {
    let profile = &aggregate.profile;

    lines.push(
        profile
            .full_name
            .clone()
            .unwrap_or_else(|| "Anonymous Seller".to_string()),
    );
    lines.push(
        profile
            .bio
            .clone()
            .unwrap_or_else(|| "Professional car and parts dealer".to_string()),
    );

    let mut contact = Vec::new();
    if let Some(location) = &profile.location {
        contact.push(location.clone());
    }
    if let Some(phone) = &profile.phone {
        contact.push(phone.clone());
    }
    contact.push(profile.email.clone());
    lines.push(contact.join(" | "));
    lines.push(format!("Rating: {}", RATING_STUB));

    if !aggregate.vehicles.is_empty() {
        lines.push(String::new());
        lines.push(format!("Available Cars ({})", aggregate.vehicles.len()));
        for listing in &aggregate.vehicles {
            render_listing(lines, listing);
        }
    }

    if !aggregate.parts.is_empty() {
        lines.push(String::new());
        lines.push(format!("Available Parts ({})", aggregate.parts.len()));
        for listing in &aggregate.parts {
            render_listing(lines, listing);
        }
    }

    if !aggregate.has_listings() {
        lines.push(String::new());
        lines.push(NO_LISTINGS_MESSAGE.to_string());
    }
}

fn render_listing(lines: &mut Vec<String>, listing: &ListingSummary) {
    lines.push(format!("  {}", listing.title));
    if let Some(detail) = detail_line(&listing.details) {
        lines.push(format!("    {}", detail));
    }
    let mut price_line = format!("    ${}", format_price(listing.price));
    if let Some(tag) = tag(&listing.details) {
        price_line.push_str(&format!(" [{}]", tag));
    }
    lines.push(price_line);
}

fn detail_line(details: &ListingDetails) -> Option<String> {
    match details {
        ListingDetails::Vehicle {
            make, model, year, ..
        } => {
            let mut parts = Vec::new();
            let name = match (make, model) {
                (Some(make), Some(model)) => Some(format!("{} {}", make, model)),
                (Some(make), None) => Some(make.clone()),
                (None, Some(model)) => Some(model.clone()),
                (None, None) => None,
            };
            if let Some(name) = name {
                parts.push(name);
            }
            if let Some(year) = year {
                parts.push(year.to_string());
            }
            if parts.is_empty() {
                None
            } else {
                Some(parts.join(" • "))
            }
        }
        ListingDetails::Part {
            category,
            condition,
        } => {
            let parts: Vec<String> = [category.clone(), condition.clone()]
                .into_iter()
                .flatten()
                .collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join(" • "))
            }
        }
    }
}

fn tag(details: &ListingDetails) -> Option<String> {
    match details {
        ListingDetails::Vehicle { fuel_type, .. } => fuel_type.clone(),
        ListingDetails::Part { condition, .. } => condition.clone(),
    }
}

/// Groups the integer part with commas; fractional prices keep two decimals.
pub fn format_price(price: f64) -> String {
    let total_cents = (price * 100.0).round() as u64;
    let whole = total_cents / 100;
    let cents = total_cents % 100;

    let mut grouped = String::new();
    let digits = whole.to_string();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if cents > 0 {
        format!("{}.{:02}", grouped, cents)
    } else {
        grouped
    }
}
