use directory_core::{BusinessRecord, NOT_AVAILABLE};
use scraper::{ElementRef, Selector};
use serde_json::Value;

use crate::config::Selectors;

/// Maps one listing fragment to a flat record.
///
/// Every field falls back to the sentinel on its own; a broken fragment
/// produces a degraded record, never an error.
pub fn extract_record(item: ElementRef<'_>, selectors: &Selectors) -> BusinessRecord {
    let analytics = embedded_analytics(item);

    let website = item
        .select(&selectors.website)
        .next()
        .and_then(|anchor| anchor.value().attr("href"))
        .map(str::to_string)
        .unwrap_or_else(not_available);

    // A missing address container blanks all three sub-fields; a missing
    // sub-element blanks only its own.
    let (address, postal_code, city) = match item.select(&selectors.address_container).next() {
        Some(row) => (
            trimmed_text(row, &selectors.street),
            trimmed_text(row, &selectors.postal_code),
            trimmed_text(row, &selectors.locality),
        ),
        None => (not_available(), not_available(), not_available()),
    };

    let phone = trimmed_text(item, &selectors.phone);

    BusinessRecord {
        name: analytics_field(&analytics, "name"),
        activity: analytics_field(&analytics, "activity"),
        province: analytics_field(&analytics, "province"),
        address,
        postal_code,
        city,
        phone,
        website,
    }
}

/// The JSON blob the site embeds on each fragment for its own analytics.
/// Missing or malformed JSON degrades to an empty map.
fn embedded_analytics(item: ElementRef<'_>) -> serde_json::Map<String, Value> {
    item.value()
        .attr("data-analytics")
        .and_then(|raw| serde_json::from_str::<Value>(raw).ok())
        .and_then(|value| match value {
            Value::Object(map) => Some(map),
            _ => None,
        })
        .unwrap_or_default()
}

fn analytics_field(analytics: &serde_json::Map<String, Value>, key: &str) -> String {
    analytics
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(not_available)
}

fn trimmed_text(scope: ElementRef<'_>, selector: &Selector) -> String {
    scope
        .select(selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .unwrap_or_else(not_available)
}

fn not_available() -> String {
    NOT_AVAILABLE.to_string()
}
