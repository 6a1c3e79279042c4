use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

use crate::models::{FlightOffer, SearchQuery};
use crate::services::OfferProvider;

/// Errors that can occur when querying the flight-offer provider
#[derive(Debug, Error)]
pub enum FlightApiError {
    #[error("flight provider API key is not configured")]
    MissingApiKey,

    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// RapidAPI-hosted flight search client.
///
/// Queries the provider's `/search` endpoint with origin/destination/date
/// parameters and maps the raw items under `data` into [`FlightOffer`]s.
/// Provider items are lenient: missing ids, destinations, and prices fall
/// back to sentinel values instead of failing the whole response.
pub struct FlightApiClient {
    base_url: String,
    api_key: Option<String>,
    api_host: String,
    currency: String,
    client: Client,
}

impl FlightApiClient {
    pub fn new(
        base_url: String,
        api_key: Option<String>,
        api_host: String,
        currency: String,
    ) -> Self {
        Self::with_timeout(base_url, api_key, api_host, currency, Duration::from_secs(30))
    }

    pub fn with_timeout(
        base_url: String,
        api_key: Option<String>,
        api_host: String,
        currency: String,
        timeout: Duration,
    ) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            api_key,
            api_host,
            currency,
            client,
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Map one raw provider item into an offer, defaulting missing fields.
    pub fn offer_from_raw(item: &Value) -> FlightOffer {
        let id = match item.get("id") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => FlightOffer::UNKNOWN_ID.to_string(),
        };

        let destination = item
            .get("destination")
            .and_then(|d| d.as_str())
            .unwrap_or(FlightOffer::UNKNOWN_DESTINATION)
            .to_string();

        let price = item.get("price").and_then(|p| p.as_f64()).unwrap_or(0.0);

        FlightOffer {
            id,
            destination,
            price,
        }
    }
}

#[async_trait]
impl OfferProvider for FlightApiClient {
    async fn fetch_offers(&self, query: &SearchQuery) -> Result<Vec<FlightOffer>, FlightApiError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(FlightApiError::MissingApiKey)?;

        let url = format!("{}/search", self.base_url.trim_end_matches('/'));

        tracing::debug!(
            "Querying flight offers: {} -> {} ({} to {})",
            query.origin,
            query.destination,
            query.depart_date,
            query.return_date
        );

        let response = self
            .client
            .get(&url)
            .query(&[
                ("origin", query.origin.as_str()),
                ("destination", query.destination.as_str()),
                ("departDate", query.depart_date.as_str()),
                ("returnDate", query.return_date.as_str()),
                ("currency", self.currency.as_str()),
            ])
            .header("X-RapidAPI-Key", api_key)
            .header("X-RapidAPI-Host", &self.api_host)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FlightApiError::ApiError(format!(
                "Flight search failed: {}",
                response.status()
            )));
        }

        let json: Value = response
            .json()
            .await
            .map_err(|e| FlightApiError::InvalidResponse(format!("Unparseable body: {}", e)))?;

        // An absent or non-array `data` field is an empty result, not an error.
        let raw_items = json
            .get("data")
            .and_then(|d| d.as_array())
            .cloned()
            .unwrap_or_default();

        let offers: Vec<FlightOffer> = raw_items.iter().map(Self::offer_from_raw).collect();

        tracing::debug!("Provider returned {} raw offers", offers.len());

        Ok(offers)
    }
}
