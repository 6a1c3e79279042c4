use serde::{Deserialize, Serialize};

/// A single travel query, built from the HTTP request and handed to the
/// search pipeline. Lives for one request only.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub description: String,
    pub selected_tags: Vec<String>,
    /// Budget ceiling as sent by the client, a decimal number in string form.
    pub budget: String,
    /// Origin location code, e.g. "LON".
    pub origin: String,
    /// Destination location code, e.g. "BCN".
    pub destination: String,
    /// ISO date, e.g. "2024-01-15".
    pub depart_date: String,
    /// ISO date, e.g. "2024-01-22".
    pub return_date: String,
}

/// A priced destination record returned by the flight-offer provider.
///
/// `price` is non-negative and only ever compared against the budget ceiling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightOffer {
    pub id: String,
    pub destination: String,
    pub price: f64,
}

impl FlightOffer {
    /// Fallback id when the provider item carries none.
    pub const UNKNOWN_ID: &'static str = "N/A";
    /// Fallback destination label when the provider item carries none.
    pub const UNKNOWN_DESTINATION: &'static str = "Unknown";
}
