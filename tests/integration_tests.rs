// Integration tests for Roamly Search
//
// Exercise the whole HTTP surface with in-process capability doubles, plus
// the real provider clients against a mockito server.

use actix_web::{test, web, App};
use async_trait::async_trait;
use std::sync::Arc;

use roamly_search::core::SearchPipeline;
use roamly_search::models::{FlightOffer, SearchFlightsResponse, SearchQuery};
use roamly_search::routes::search::AppState;
use roamly_search::routes::{configure_routes, handle_json_payload_error};
use roamly_search::services::{
    FlightApiError, OfferProvider, OpenAiClient, TagExtractor, TagProviderError,
};

struct FixedTags(Vec<String>);

#[async_trait]
impl TagExtractor for FixedTags {
    async fn extract_tags(&self, _description: &str) -> Result<Vec<String>, TagProviderError> {
        Ok(self.0.clone())
    }
}

struct FixedOffers(Vec<FlightOffer>);

#[async_trait]
impl OfferProvider for FixedOffers {
    async fn fetch_offers(&self, _query: &SearchQuery) -> Result<Vec<FlightOffer>, FlightApiError> {
        Ok(self.0.clone())
    }
}

struct DownProvider;

#[async_trait]
impl OfferProvider for DownProvider {
    async fn fetch_offers(&self, _query: &SearchQuery) -> Result<Vec<FlightOffer>, FlightApiError> {
        Err(FlightApiError::ApiError("connection refused".to_string()))
    }
}

fn offer(id: &str, price: f64) -> FlightOffer {
    FlightOffer {
        id: id.to_string(),
        destination: "Barcelona".to_string(),
        price,
    }
}

fn state(
    tags: impl TagExtractor + 'static,
    offers: impl OfferProvider + 'static,
) -> AppState {
    AppState {
        pipeline: Arc::new(SearchPipeline::new(Arc::new(tags), Arc::new(offers))),
        providers_configured: true,
    }
}

fn search_body(budget: &str, selected_tags: Vec<&str>) -> serde_json::Value {
    serde_json::json!({
        "description": "a week of beaches",
        "selectedTags": selected_tags,
        "budget": budget,
        "origin": "LON",
        "destinationCode": "BCN",
        "departureDate": "2024-01-15",
        "returnDate": "2024-01-22",
    })
}

#[actix_web::test]
async fn test_end_to_end_search_filters_by_budget() {
    let app_state = state(
        FixedTags(vec![]),
        FixedOffers(vec![offer("a", 300.0), offer("b", 600.0), offer("c", 500.0)]),
    );

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/search/flights")
        .set_json(search_body("500", vec!["beach"]))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::OK);

    let body: SearchFlightsResponse = test::read_body_json(resp).await;
    let prices: Vec<f64> = body.flights.iter().map(|f| f.price).collect();
    assert_eq!(prices, vec![300.0, 500.0]);
}

#[actix_web::test]
async fn test_unparseable_json_body_returns_500() {
    let app_state = state(FixedTags(vec![]), FixedOffers(vec![]));

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/search/flights")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(
        resp.status(),
        actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[actix_web::test]
async fn test_offer_provider_failure_yields_empty_flight_list() {
    let app_state = state(FixedTags(vec![]), DownProvider);

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/search/flights")
        .set_json(search_body("500", vec![]))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::OK);

    let body: SearchFlightsResponse = test::read_body_json(resp).await;
    assert!(body.flights.is_empty());
}

#[actix_web::test]
async fn test_selected_tags_bypass_unreachable_tag_provider() {
    // Tag provider pointed at nothing; pre-selected tags must not touch it.
    let openai = OpenAiClient::new(
        "http://127.0.0.1:1".to_string(),
        Some("unused".to_string()),
        "gpt-3.5-turbo".to_string(),
    );

    let app_state = AppState {
        pipeline: Arc::new(SearchPipeline::new(
            Arc::new(openai),
            Arc::new(FixedOffers(vec![offer("a", 100.0)])),
        )),
        providers_configured: true,
    };

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/search/flights")
        .set_json(search_body("500", vec!["beach"]))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::OK);

    let body: SearchFlightsResponse = test::read_body_json(resp).await;
    assert_eq!(body.flights.len(), 1);
}

#[actix_web::test]
async fn test_unreachable_tag_provider_still_searches() {
    // No selected tags and a dead tag provider: the pipeline degrades to an
    // empty tag list and the offer fetch still runs.
    let openai = OpenAiClient::new(
        "http://127.0.0.1:1".to_string(),
        Some("unused".to_string()),
        "gpt-3.5-turbo".to_string(),
    );

    let app_state = AppState {
        pipeline: Arc::new(SearchPipeline::new(
            Arc::new(openai),
            Arc::new(FixedOffers(vec![offer("a", 100.0)])),
        )),
        providers_configured: true,
    };

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/search/flights")
        .set_json(search_body("500", vec![]))
        .to_request();

    let resp = test::call_service(&app, req).await;
    let body: SearchFlightsResponse = test::read_body_json(resp).await;
    assert_eq!(body.flights.len(), 1);
}
