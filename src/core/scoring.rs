use crate::models::{EventRecord, Priority, RuleWeights};

/// Calculate the rule-based score for an event
///
/// Scoring rules (with default weights):
///     +2 if the event type is "academic"
///     +1 if the venue name contains "auditorium"
///     +2 if expected attendance exceeds 100
///
/// Maximum score with defaults: 5.
pub fn rule_score(event: &EventRecord, weights: &RuleWeights) -> i32 {
    let mut score = 0;

    if is_academic(event) {
        score += weights.academic;
    }
    if has_auditorium_venue(event) {
        score += weights.auditorium;
    }
    if event.expected_count > weights.attendance_threshold {
        score += weights.large_attendance;
    }

    score
}

#[inline]
pub fn is_academic(event: &EventRecord) -> bool {
    event.event_type.eq_ignore_ascii_case("academic")
}

#[inline]
pub fn has_auditorium_venue(event: &EventRecord) -> bool {
    event.venue.to_lowercase().contains("auditorium")
}

/// Priority from rule-score thresholds, used when no classifier is loaded
pub fn priority_from_rule_score(score: i32, weights: &RuleWeights) -> Priority {
    if score >= weights.high_cutoff {
        Priority::High
    } else if score >= weights.medium_cutoff {
        Priority::Medium
    } else {
        Priority::Low
    }
}
