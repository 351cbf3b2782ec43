use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Structured scheduling request, as produced by the extraction layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRequest {
    #[serde(rename = "durationDays", alias = "duration_days")]
    pub duration_days: u32,
    #[serde(rename = "preferredVenue", alias = "preferred_venue", default)]
    pub preferred_venue: String,
    #[serde(default)]
    pub constraints: Vec<String>,
    #[serde(rename = "latestAllowedDate", alias = "latest_allowed_date", default)]
    pub latest_allowed_date: Option<NaiveDate>,
}

impl EventRequest {
    /// Build a request with a normalized duration (at least one day)
    pub fn new(
        duration_days: u32,
        preferred_venue: impl Into<String>,
        constraints: Vec<String>,
        latest_allowed_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            duration_days: duration_days.max(1),
            preferred_venue: preferred_venue.into(),
            constraints,
            latest_allowed_date,
        }
    }
}

/// One (day, failing predicate) pair recorded during the slot search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkipReason {
    pub date: NaiveDate,
    pub reason: String,
}

impl SkipReason {
    pub fn new(date: NaiveDate, reason: impl Into<String>) -> Self {
        Self {
            date,
            reason: reason.into(),
        }
    }
}

/// Outcome of a slot search
///
/// `start_date` and `end_date` are either both present (a clear window was
/// found) or both absent (horizon exhausted or cutoff exceeded). The skip log
/// is insertion-ordered and may carry several reasons for the same date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotResult {
    #[serde(rename = "startDate")]
    pub start_date: Option<NaiveDate>,
    #[serde(rename = "endDate")]
    pub end_date: Option<NaiveDate>,
    pub skipped: Vec<SkipReason>,
}

impl SlotResult {
    /// Whether the search produced a usable window
    pub fn found(&self) -> bool {
        self.start_date.is_some()
    }
}

/// Booked event as submitted for prioritization
///
/// Upstream clients disagree on field spelling, so every logical field accepts
/// both the camelCase and snake_case form and defaults when absent. Fields the
/// ranker does not know about ride through untouched in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRecord {
    #[serde(default)]
    pub title: String,
    #[serde(rename = "eventType", alias = "event_type", default)]
    pub event_type: String,
    #[serde(alias = "preferred_venue", default)]
    pub venue: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(rename = "createdAt", alias = "created_at", default)]
    pub created_at: Option<String>,
    #[serde(rename = "expected_count", alias = "expected_attendance", default)]
    pub expected_count: i64,
    #[serde(default)]
    pub approvers: Vec<Value>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Priority label attached to a ranked event
///
/// Serialized capitalized; the lowercase aliases accept classifier artifact
/// labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    #[serde(alias = "high")]
    High,
    #[serde(alias = "medium")]
    Medium,
    #[serde(alias = "low")]
    Low,
}

impl Priority {
    /// Parse a classifier label (`low` / `medium` / `high`, any case)
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_lowercase().as_str() {
            "high" => Some(Priority::High),
            "medium" => Some(Priority::Medium),
            "low" => Some(Priority::Low),
            _ => None,
        }
    }

    /// Classifier contribution before weighting: high 2, medium 1, low 0
    pub fn ml_score(self) -> i32 {
        match self {
            Priority::High => 2,
            Priority::Medium => 1,
            Priority::Low => 0,
        }
    }
}

/// Event decorated with its priority label and combined score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedEvent {
    #[serde(flatten)]
    pub event: EventRecord,
    pub priority: Priority,
    pub score: i32,
}

/// Point values and cutoffs for the rule-based score
#[derive(Debug, Clone, Copy)]
pub struct RuleWeights {
    pub academic: i32,
    pub auditorium: i32,
    pub large_attendance: i32,
    pub attendance_threshold: i64,
    pub ml_weight: i32,
    pub high_cutoff: i32,
    pub medium_cutoff: i32,
}

impl Default for RuleWeights {
    fn default() -> Self {
        Self {
            academic: 2,
            auditorium: 1,
            large_attendance: 2,
            attendance_threshold: 100,
            ml_weight: 3,
            high_cutoff: 4,
            medium_cutoff: 2,
        }
    }
}

/// Venue catalog entry used for suggestions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenueInfo {
    pub name: String,
    pub capacity: i64,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Fields recovered from a free-text description by the extraction API
///
/// Every field is defaulted: the extractor is an external model and routinely
/// omits what the description did not mention.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedEvent {
    #[serde(default)]
    pub event_type: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_duration")]
    pub duration_days: i64,
    #[serde(default)]
    pub preferred_venue: String,
    #[serde(default)]
    pub expected_attendance: i64,
    #[serde(default, deserialize_with = "list_or_map_values")]
    pub constraints: Vec<String>,
    #[serde(default)]
    pub resource_requirements: Vec<String>,
}

fn default_duration() -> i64 {
    1
}

/// Accept a JSON array of strings, or an object whose values are the strings
/// (some model replies shape constraints as a map)
fn list_or_map_values<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let items: Vec<Value> = match value {
        Value::Array(items) => items,
        Value::Object(map) => map.into_iter().map(|(_, v)| v).collect(),
        Value::String(s) => return Ok(vec![s]),
        _ => return Ok(Vec::new()),
    };
    Ok(items
        .into_iter()
        .filter_map(|item| item.as_str().map(str::to_owned))
        .collect())
}
