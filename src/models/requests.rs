use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::SearchQuery;

/// Request to search flights
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SearchFlightsRequest {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    #[serde(alias = "selected_tags", rename = "selectedTags")]
    pub selected_tags: Vec<String>,
    #[validate(length(min = 1))]
    pub budget: String,
    #[validate(length(equal = 3))]
    pub origin: String,
    #[validate(length(equal = 3))]
    #[serde(alias = "destination_code", rename = "destinationCode")]
    pub destination_code: String,
    #[validate(length(min = 1))]
    #[serde(alias = "departure_date", rename = "departureDate")]
    pub departure_date: String,
    #[validate(length(min = 1))]
    #[serde(alias = "return_date", rename = "returnDate")]
    pub return_date: String,
}

impl From<SearchFlightsRequest> for SearchQuery {
    fn from(req: SearchFlightsRequest) -> Self {
        SearchQuery {
            description: req.description,
            selected_tags: req.selected_tags,
            budget: req.budget,
            origin: req.origin,
            destination: req.destination_code,
            depart_date: req.departure_date,
            return_date: req.return_date,
        }
    }
}
