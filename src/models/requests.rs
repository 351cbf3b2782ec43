use crate::models::domain::EventRecord;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to parse an event description and suggest a date
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SuggestDateRequest {
    #[validate(length(min = 1))]
    pub description: String,
}

/// Request to rank a batch of booked events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrioritizeRequest {
    #[serde(default)]
    pub events: Vec<EventRecord>,
}
