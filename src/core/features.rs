use crate::core::scoring::{has_auditorium_venue, is_academic};
use crate::models::EventRecord;
use chrono::NaiveDate;

/// Feature vector length expected by the classifier and scaler
pub const FEATURE_DIM: usize = 5;

/// Extract the classifier feature vector for an event:
/// `[is_academic, is_auditorium_venue, expected_count, num_approvers, days_until_event]`
pub fn extract_features(event: &EventRecord) -> [f64; FEATURE_DIM] {
    [
        if is_academic(event) { 1.0 } else { 0.0 },
        if has_auditorium_venue(event) { 1.0 } else { 0.0 },
        event.expected_count as f64,
        event.approvers.len() as f64,
        days_until_event(event) as f64,
    ]
}

/// Days between an event's creation and the event itself
///
/// Both fields are `YYYY-MM-DD`; `created_at` may carry a time suffix, of
/// which only the date part is read. A missing creation date falls back to
/// the event date (zero days), and a missing event date or any parse failure
/// degrades to zero rather than failing the ranking.
pub fn days_until_event(event: &EventRecord) -> i64 {
    let event_date = match event.date.as_deref().and_then(parse_day) {
        Some(date) => date,
        None => return 0,
    };

    let created_at = match event.created_at.as_deref() {
        Some(raw) => match parse_day(raw) {
            Some(date) => date,
            None => return 0,
        },
        None => event_date,
    };

    (event_date - created_at).num_days()
}

/// Parse `YYYY-MM-DD`, ignoring anything after the first ten characters
fn parse_day(raw: &str) -> Option<NaiveDate> {
    let head = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}
