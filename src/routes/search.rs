use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::SearchPipeline;
use crate::models::{ErrorResponse, HealthResponse, SearchFlightsRequest, SearchFlightsResponse, SearchQuery};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<SearchPipeline>,
    /// Whether both provider API keys were present at startup. Requests are
    /// still served without them; unkeyed steps degrade to empty results.
    pub providers_configured: bool,
}

/// Configure all search-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/search/flights", web::post().to(search_flights));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = if state.providers_configured {
        "healthy"
    } else {
        "degraded"
    };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Flight search endpoint
///
/// POST /api/v1/search/flights
///
/// Request body:
/// ```json
/// {
///   "description": "string",
///   "selectedTags": ["string"],
///   "budget": "500",
///   "origin": "LON",
///   "destinationCode": "BCN",
///   "departureDate": "2024-01-15",
///   "returnDate": "2024-01-22"
/// }
/// ```
async fn search_flights(
    state: web::Data<AppState>,
    req: web::Json<SearchFlightsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for search_flights request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let search_id = uuid::Uuid::new_v4();
    let query: SearchQuery = req.into_inner().into();

    tracing::info!(
        "Searching flights [{}]: {} -> {}, budget {}",
        search_id,
        query.origin,
        query.destination,
        query.budget
    );

    let flights = state.pipeline.search(&query).await;

    tracing::info!("Returning {} flights [{}]", flights.len(), search_id);

    HttpResponse::Ok().json(SearchFlightsResponse { flights })
}
