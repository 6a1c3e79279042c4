use std::sync::Arc;

use crate::core::filters::{filter_by_budget, parse_budget};
use crate::models::{FlightOffer, SearchQuery};
use crate::services::{OfferProvider, TagExtractor};

/// Sequential search pipeline: resolve tags, fetch offers, filter by budget.
///
/// Provider failures never escape this type. Every outbound error is logged
/// and degraded to an empty result, so callers see "no flights" whether the
/// provider failed or genuinely had nothing — matching the product behavior
/// of the search endpoint.
pub struct SearchPipeline {
    tags: Arc<dyn TagExtractor>,
    offers: Arc<dyn OfferProvider>,
}

impl SearchPipeline {
    pub fn new(tags: Arc<dyn TagExtractor>, offers: Arc<dyn OfferProvider>) -> Self {
        Self { tags, offers }
    }

    /// Resolve the tag set for a query.
    ///
    /// User-selected tags win unconditionally; the extraction provider is
    /// only consulted when the caller selected none.
    pub async fn resolve_tags(&self, description: &str, selected: &[String]) -> Vec<String> {
        if !selected.is_empty() {
            return selected.to_vec();
        }

        match self.tags.extract_tags(description).await {
            Ok(tags) => tags,
            Err(e) => {
                tracing::warn!("Tag extraction failed, continuing without tags: {}", e);
                vec![]
            }
        }
    }

    /// Run the full pipeline for one query.
    pub async fn search(&self, query: &SearchQuery) -> Vec<FlightOffer> {
        let tags = self
            .resolve_tags(&query.description, &query.selected_tags)
            .await;

        tracing::debug!("Resolved {} tags for query to {}", tags.len(), query.destination);

        let offers = match self.offers.fetch_offers(query).await {
            Ok(offers) => offers,
            Err(e) => {
                tracing::error!("Offer fetch failed, returning no flights: {}", e);
                return vec![];
            }
        };

        let budget = match parse_budget(&query.budget) {
            Some(budget) => budget,
            None => {
                tracing::warn!("Unparseable budget {:?}, no offer can match", query.budget);
                return vec![];
            }
        };

        filter_by_budget(offers, budget)
    }
}
