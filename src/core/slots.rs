use crate::core::calendar::CalendarData;
use crate::core::checks::day_rejections;
use crate::models::{EventRequest, SlotResult};
use chrono::{Duration, Local, NaiveDate};

/// Forward day-by-day slot search
///
/// Scans candidate start dates beginning tomorrow, rejecting any window in
/// which at least one day fails a predicate, and returns the first fully
/// clear window of the requested duration together with the skip log.
#[derive(Debug, Clone)]
pub struct SlotFinder {
    horizon_days: u32,
}

impl SlotFinder {
    /// Number of candidate start days tried before giving up
    pub const DEFAULT_HORIZON_DAYS: u32 = 30;

    pub fn new(horizon_days: u32) -> Self {
        Self { horizon_days }
    }

    pub fn with_default_horizon() -> Self {
        Self::new(Self::DEFAULT_HORIZON_DAYS)
    }

    /// Find the first open slot starting tomorrow
    ///
    /// Precondition: `request.duration_days >= 1` (enforced where requests are
    /// assembled, see `EventRequest::new`).
    pub fn find_slot(&self, request: &EventRequest, calendar: &CalendarData) -> SlotResult {
        self.find_slot_from(Local::now().date_naive(), request, calendar)
    }

    /// Find the first open slot, searching forward from the day after `today`
    ///
    /// An exhausted horizon and an exceeded cutoff both yield a result with no
    /// start date; neither is an error.
    pub fn find_slot_from(
        &self,
        today: NaiveDate,
        request: &EventRequest,
        calendar: &CalendarData,
    ) -> SlotResult {
        let venue = request.preferred_venue.as_str();
        let mut skipped = Vec::new();
        let mut candidate = today + Duration::days(1);

        for _ in 0..self.horizon_days {
            if let Some(cutoff) = request.latest_allowed_date {
                if candidate > cutoff {
                    return SlotResult {
                        start_date: None,
                        end_date: None,
                        skipped,
                    };
                }
            }

            let end = candidate + Duration::days(request.duration_days as i64 - 1);

            let mut reasons = Vec::new();
            let mut day = candidate;
            while day <= end {
                reasons.extend(day_rejections(day, venue, calendar));
                day += Duration::days(1);
            }

            if reasons.is_empty() {
                // First fully clear window wins
                return SlotResult {
                    start_date: Some(candidate),
                    end_date: Some(end),
                    skipped,
                };
            }

            skipped.extend(reasons);
            candidate += Duration::days(1);
        }

        SlotResult {
            start_date: None,
            end_date: None,
            skipped,
        }
    }
}

impl Default for SlotFinder {
    fn default() -> Self {
        Self::with_default_horizon()
    }
}
