use serde::Serialize;

/// Placeholder written whenever a field cannot be located or parsed.
pub const NOT_AVAILABLE: &str = "N/A";

/// One scraped business listing, flattened to the eight exported fields.
///
/// Declaration order is the output column order; the serde names double as
/// the CSV header row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BusinessRecord {
    pub name: String,
    pub activity: String,
    pub province: String,
    pub address: String,
    pub postal_code: String,
    pub city: String,
    pub phone: String,
    pub website: String,
}

impl Default for BusinessRecord {
    /// A record with every field set to the sentinel.
    fn default() -> Self {
        Self {
            name: NOT_AVAILABLE.to_string(),
            activity: NOT_AVAILABLE.to_string(),
            province: NOT_AVAILABLE.to_string(),
            address: NOT_AVAILABLE.to_string(),
            postal_code: NOT_AVAILABLE.to_string(),
            city: NOT_AVAILABLE.to_string(),
            phone: NOT_AVAILABLE.to_string(),
            website: NOT_AVAILABLE.to_string(),
        }
    }
}
