// Service exports
pub mod flights;
pub mod openai;

use async_trait::async_trait;

use crate::models::{FlightOffer, SearchQuery};

pub use flights::{FlightApiClient, FlightApiError};
pub use openai::{OpenAiClient, TagProviderError};

/// Capability to turn a free-text trip description into interest tags.
///
/// Implementors encapsulate transport and vendor-specific API details so the
/// search pipeline stays decoupled from any particular provider and can be
/// tested without network access.
#[async_trait]
pub trait TagExtractor: Send + Sync {
    async fn extract_tags(&self, description: &str) -> Result<Vec<String>, TagProviderError>;
}

/// Capability to fetch flight offers for a travel query.
#[async_trait]
pub trait OfferProvider: Send + Sync {
    async fn fetch_offers(&self, query: &SearchQuery) -> Result<Vec<FlightOffer>, FlightApiError>;
}
