use crate::models::domain::{ExtractedEvent, SkipReason};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Response for the suggest-date endpoint
///
/// Echoes the extracted fields and attaches the search outcome. A null start
/// date means no suitable slot exists inside the search window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestDateResponse {
    #[serde(flatten)]
    pub event: ExtractedEvent,
    pub suggested_start_date: Option<NaiveDate>,
    pub suggested_end_date: Option<NaiveDate>,
    pub skipped_reasons: Vec<SkipReason>,
    pub venue_suggestions: VenueSuggestions,
}

/// Alternative venues for the extracted event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenueSuggestions {
    pub suggested_venues: Vec<String>,
    pub based_on: VenueCriteria,
}

/// What the venue suggestions were derived from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenueCriteria {
    pub event_type: String,
    pub audience: i64,
    pub preferred_types: Vec<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
