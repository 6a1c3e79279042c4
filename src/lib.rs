//! Roamly Search - Flight search gateway for the Roamly group-trip planner
//!
//! This library implements the server side of the flight search feature:
//! it resolves a free-text trip description into interest tags via a
//! chat-completion provider, queries a flight-offer provider, and filters
//! the offers by the caller's budget ceiling.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{filter_by_budget, parse_budget, SearchPipeline};
pub use crate::models::{FlightOffer, SearchFlightsRequest, SearchFlightsResponse, SearchQuery};
pub use crate::services::{OfferProvider, TagExtractor};
