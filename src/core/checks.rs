use crate::core::calendar::{is_weekend, CalendarData};
use crate::models::SkipReason;
use chrono::NaiveDate;

/// Collect every reason a day cannot host an event at the given venue
///
/// The four checks are independent, so a single day may be rejected for more
/// than one reason. An empty result means the day is fully clear.
pub fn day_rejections(day: NaiveDate, venue: &str, calendar: &CalendarData) -> Vec<SkipReason> {
    let mut reasons = Vec::new();

    if calendar.is_holiday(day) {
        reasons.push(SkipReason::new(day, "Holiday"));
    }
    if calendar.is_exam_day(day) {
        reasons.push(SkipReason::new(day, "Exam"));
    }
    if is_weekend(day) {
        reasons.push(SkipReason::new(day, "Weekend"));
    }
    if !calendar.venue_available(day, venue) {
        reasons.push(SkipReason::new(day, format!("{} not available", venue)));
    }

    reasons
}
