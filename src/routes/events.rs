use crate::core::{preferred_kinds, resolve_cutoff, suggest_venues, CalendarData, Ranker, SlotFinder};
use crate::models::{
    ErrorResponse, EventRequest, HealthResponse, PrioritizeRequest, SuggestDateRequest,
    SuggestDateResponse, VenueCriteria, VenueSuggestions, VenueInfo,
};
use crate::services::ExtractorClient;
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub extractor: Arc<ExtractorClient>,
    pub calendar: Arc<CalendarData>,
    pub venues: Arc<Vec<VenueInfo>>,
    pub finder: SlotFinder,
    pub ranker: Ranker,
}

/// Configure all event-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/events/suggest-date", web::post().to(suggest_date))
        .route("/events/prioritize", web::post().to(prioritize_events));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Suggest a date endpoint
///
/// POST /api/v1/events/suggest-date
///
/// Request body:
/// ```json
/// {
///   "description": "Plan a 2-day AI workshop before Diwali in the main auditorium"
/// }
/// ```
async fn suggest_date(
    state: web::Data<AppState>,
    req: web::Json<SuggestDateRequest>,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for suggest_date request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    tracing::info!(
        "Suggesting date for description ({} chars)",
        req.description.len()
    );

    // Forward the description to the extraction API
    let extracted = match state.extractor.extract_event(&req.description).await {
        Ok(extracted) => extracted,
        Err(e) => {
            tracing::error!("Extraction failed: {}", e);
            return HttpResponse::BadGateway().json(ErrorResponse {
                error: "Extraction failed".to_string(),
                message: e.to_string(),
                status_code: 502,
            });
        }
    };

    // Normalize what the model gave us; an unspecified venue stays empty and
    // the search reports every day as unavailable for it
    let duration_days = extracted.duration_days.clamp(1, 365) as u32;
    let cutoff = resolve_cutoff(&extracted.constraints, &state.calendar);

    let request = EventRequest::new(
        duration_days,
        extracted.preferred_venue.clone(),
        extracted.constraints.clone(),
        cutoff,
    );

    let slot = state.finder.find_slot(&request, &state.calendar);

    tracing::info!(
        "Slot search finished: start={:?}, {} reasons in skip log",
        slot.start_date,
        slot.skipped.len()
    );

    let audience = extracted.expected_attendance.max(1);
    let suggested_venues = suggest_venues(&extracted.event_type, audience, &state.venues);
    let preferred_types = preferred_kinds(&extracted.event_type)
        .iter()
        .map(|kind| kind.to_string())
        .collect();

    let response = SuggestDateResponse {
        suggested_start_date: slot.start_date,
        suggested_end_date: slot.end_date,
        skipped_reasons: slot.skipped,
        venue_suggestions: VenueSuggestions {
            suggested_venues,
            based_on: VenueCriteria {
                event_type: extracted.event_type.clone(),
                audience,
                preferred_types,
            },
        },
        event: extracted,
    };

    HttpResponse::Ok().json(response)
}

/// Prioritize events endpoint
///
/// POST /api/v1/events/prioritize
///
/// Request body:
/// ```json
/// {
///   "events": [{ "title": "...", "eventType": "...", "venue": "...", "expected_count": 0 }]
/// }
/// ```
///
/// Returns the events decorated with `priority` and `score`, sorted by
/// descending combined score.
async fn prioritize_events(
    state: web::Data<AppState>,
    req: web::Json<PrioritizeRequest>,
) -> impl Responder {
    tracing::info!("Prioritizing {} events", req.events.len());

    let ranked = state.ranker.rank(req.into_inner().events);

    HttpResponse::Ok().json(ranked)
}
