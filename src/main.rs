mod config;
mod core;
mod models;
mod routes;
mod services;

use actix_cors::Cors;
use actix_web::{error, http::StatusCode, middleware, web, App, HttpResponse, HttpServer};
use config::Settings;
use core::classifier::PriorityModel;
use core::{Ranker, SlotFinder};
use models::RuleWeights;
use routes::events::AppState;
use services::{CalendarStore, ExtractorClient};
use std::sync::Arc;
use tracing::{error, info, warn};

/// JSON error response for JSON payload errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST))
            .content_type("application/json")
            .body(serde_json::to_string(self).unwrap())
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    JsonError {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    }
    .into()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting Eventra Algo scheduling service...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    // Load the calendar tables and venue catalog
    let store = CalendarStore::load(
        &settings.data.holidays_file,
        &settings.data.exams_file,
        &settings.data.availability_file,
        &settings.data.venues_file,
    )
    .unwrap_or_else(|e| {
        error!("Failed to load calendar tables: {}", e);
        panic!("Calendar table error: {}", e);
    });

    info!(
        "Calendar tables loaded ({} venues in catalog)",
        store.venues.len()
    );

    // Initialize the extraction client
    let extractor = Arc::new(ExtractorClient::new(
        settings.extractor.endpoint,
        settings.extractor.api_key,
        settings.extractor.model,
    ));

    info!("Extraction client initialized");

    // Initialize the ranker with configured weights, blending in the
    // classifier when an artifact is configured and loads cleanly
    let weights = RuleWeights {
        academic: settings.scoring.weights.academic,
        auditorium: settings.scoring.weights.auditorium,
        large_attendance: settings.scoring.weights.large_attendance,
        attendance_threshold: settings.scoring.weights.attendance_threshold,
        ml_weight: settings.scoring.weights.ml_weight,
        high_cutoff: settings.scoring.weights.high_cutoff,
        medium_cutoff: settings.scoring.weights.medium_cutoff,
    };

    let ranker = match settings.classifier.model_file.as_deref() {
        Some(path) => match PriorityModel::from_path(path) {
            Ok(model) => {
                info!("Priority classifier loaded from {}", path);
                Ranker::with_model(weights, model)
            }
            Err(e) => {
                warn!("Failed to load classifier ({}), ranking with rules only", e);
                Ranker::new(weights)
            }
        },
        None => Ranker::new(weights),
    };

    let finder = SlotFinder::new(settings.scheduling.search_horizon_days);

    info!(
        "Slot finder initialized (horizon: {} days)",
        settings.scheduling.search_horizon_days
    );

    // Build application state
    let app_state = AppState {
        extractor,
        calendar: Arc::new(store.calendar),
        venues: Arc::new(store.venues),
        finder,
        ranker,
    };

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
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
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
