use crate::core::calendar::CalendarData;
use chrono::{Duration, NaiveDate};

/// Resolve free-text constraints to a single latest-allowed start date
///
/// Only the phrasing `before <holiday name>` is recognized; the name is
/// matched case-insensitively against the holiday table's occasion names and
/// the cutoff is the day before that holiday. Every other constraint string
/// is accepted and ignored, and the last recognized constraint wins. This is
/// a deliberately minimal interpreter; the unrecognized phrasings stay
/// advisory text for the organizers.
pub fn resolve_cutoff(constraints: &[String], calendar: &CalendarData) -> Option<NaiveDate> {
    let mut cutoff = None;

    for constraint in constraints {
        let lowered = constraint.to_lowercase();
        let Some(position) = lowered.find("before ") else {
            continue;
        };
        let name = lowered[position + "before ".len()..].trim();
        if name.is_empty() {
            continue;
        }
        if let Some(holiday) = calendar.holiday_named(name) {
            cutoff = Some(holiday - Duration::days(1));
        }
    }

    cutoff
}
