// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{FlightOffer, SearchQuery};
pub use requests::SearchFlightsRequest;
pub use responses::{ErrorResponse, HealthResponse, SearchFlightsResponse};
