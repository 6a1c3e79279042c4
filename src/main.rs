mod config;
mod core;
mod models;
mod routes;
mod services;

use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use crate::config::Settings;
use crate::core::SearchPipeline;
use crate::routes::handle_json_payload_error;
use crate::routes::search::AppState;
use crate::services::{FlightApiClient, OpenAiClient};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(log_level))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting Roamly flight search gateway...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    // Initialize the tag-extraction client
    if settings.openai.api_key.is_none() {
        warn!("OPENAI_API_KEY not set - tag extraction will return empty tag lists");
    }
    let tag_timeout = Duration::from_secs(settings.openai.timeout_secs.unwrap_or(30));
    let openai = Arc::new(OpenAiClient::with_timeout(
        settings.openai.endpoint,
        settings.openai.api_key,
        settings.openai.model,
        tag_timeout,
    ));

    // Initialize the flight-offer client
    if settings.flights.api_key.is_none() {
        warn!("RAPIDAPI_KEY not set - flight search will return empty offer lists");
    }
    let flights_timeout = Duration::from_secs(settings.flights.timeout_secs.unwrap_or(30));
    let flights = Arc::new(FlightApiClient::with_timeout(
        settings.flights.endpoint,
        settings.flights.api_key,
        settings.flights.api_host,
        settings.flights.currency,
        flights_timeout,
    ));

    let providers_configured = openai.has_api_key() && flights.has_api_key();

    // Build application state
    let app_state = AppState {
        pipeline: Arc::new(SearchPipeline::new(openai, flights)),
        providers_configured,
    };

    info!("Search pipeline initialized");

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
