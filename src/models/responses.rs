use crate::models::domain::FlightOffer;
use serde::{Deserialize, Serialize};

/// Response for the flight search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchFlightsResponse {
    pub flights: Vec<FlightOffer>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
