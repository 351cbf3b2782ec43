use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::{HashMap, HashSet};

/// Read-only holiday, exam, and venue-availability tables injected into the
/// scheduling core
///
/// Built once at startup from the spreadsheet loaders and shared across
/// requests; the search itself performs no I/O.
#[derive(Debug, Clone, Default)]
pub struct CalendarData {
    holidays: HashSet<NaiveDate>,
    /// Lowercased occasion name and date, in table order
    occasions: Vec<(String, NaiveDate)>,
    exam_days: HashSet<NaiveDate>,
    /// Keyed by (date, lowercased venue name)
    venue_slots: HashMap<(NaiveDate, String), bool>,
}

impl CalendarData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a holiday with its occasion name
    pub fn add_holiday(&mut self, date: NaiveDate, occasion: &str) {
        self.holidays.insert(date);
        self.occasions.push((occasion.to_lowercase(), date));
    }

    /// Register an inclusive exam date range, expanded to individual days
    pub fn add_exam_range(&mut self, start: NaiveDate, end: NaiveDate) {
        let mut day = start;
        while day <= end {
            self.exam_days.insert(day);
            match day.succ_opt() {
                Some(next) => day = next,
                None => break,
            }
        }
    }

    /// Record whether a venue is available on a given day
    pub fn set_venue_availability(&mut self, date: NaiveDate, venue: &str, available: bool) {
        self.venue_slots
            .insert((date, venue.to_lowercase()), available);
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains(&date)
    }

    pub fn is_exam_day(&self, date: NaiveDate) -> bool {
        self.exam_days.contains(&date)
    }

    /// Whether the venue has an available row for that day
    ///
    /// Venue names match case-insensitively but exactly; a day with no row at
    /// all counts as unavailable.
    pub fn venue_available(&self, date: NaiveDate, venue: &str) -> bool {
        self.venue_slots
            .get(&(date, venue.to_lowercase()))
            .copied()
            .unwrap_or(false)
    }

    /// Look up a holiday by occasion name (case-insensitive substring match,
    /// first hit in table order)
    pub fn holiday_named(&self, name: &str) -> Option<NaiveDate> {
        let needle = name.to_lowercase();
        self.occasions
            .iter()
            .find(|(occasion, _)| occasion.contains(&needle))
            .map(|(_, date)| *date)
    }
}

/// Saturday or Sunday
#[inline]
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
