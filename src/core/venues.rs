use crate::models::VenueInfo;

/// Preferred venue kinds per event type, most preferred first
pub fn preferred_kinds(event_type: &str) -> &'static [&'static str] {
    match event_type.to_lowercase().as_str() {
        "workshop" => &["seminar", "media", "classroom", "auditorium"],
        "seminar" => &["seminar", "auditorium", "meeting"],
        "cultural" => &["auditorium"],
        "technical" => &["lab"],
        _ => &["classroom", "meeting", "auditorium"],
    }
}

/// Venues from the catalog that fit the audience and suit the event type
///
/// Only venues whose capacity covers the expected attendance and whose kind
/// is preferred for the event type are returned, ordered by kind preference
/// and then by capacity, so the smallest adequate room comes first.
pub fn suggest_venues(
    event_type: &str,
    expected_attendance: i64,
    catalog: &[VenueInfo],
) -> Vec<String> {
    let kinds = preferred_kinds(event_type);

    let mut suitable: Vec<&VenueInfo> = catalog
        .iter()
        .filter(|venue| venue.capacity >= expected_attendance)
        .filter(|venue| kinds.iter().any(|kind| venue.kind.eq_ignore_ascii_case(kind)))
        .collect();

    suitable.sort_by_key(|venue| {
        let rank = kinds
            .iter()
            .position(|kind| venue.kind.eq_ignore_ascii_case(kind))
            .unwrap_or(kinds.len());
        (rank, venue.capacity)
    });

    suitable.into_iter().map(|venue| venue.name.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<VenueInfo> {
        let venues = serde_json::json!([
            {"name": "Main Auditorium", "capacity": 400, "type": "auditorium"},
            {"name": "Seminar Hall A", "capacity": 90, "type": "seminar"},
            {"name": "Seminar Hall B", "capacity": 80, "type": "seminar"},
            {"name": "Lab Block 1", "capacity": 50, "type": "lab"},
            {"name": "Room 101", "capacity": 40, "type": "classroom"},
            {"name": "AV Hall", "capacity": 70, "type": "media"},
            {"name": "Conference Room", "capacity": 30, "type": "meeting"},
        ]);
        serde_json::from_value(venues).unwrap()
    }

    #[test]
    fn test_kind_preference_orders_before_capacity() {
        let suggested = suggest_venues("workshop", 60, &catalog());

        // seminar halls outrank media and auditorium for workshops, and the
        // smaller adequate seminar hall comes first
        assert_eq!(
            suggested,
            vec!["Seminar Hall B", "Seminar Hall A", "AV Hall", "Main Auditorium"]
        );
    }

    #[test]
    fn test_capacity_filter() {
        let suggested = suggest_venues("cultural", 500, &catalog());
        assert!(suggested.is_empty());

        let suggested = suggest_venues("cultural", 200, &catalog());
        assert_eq!(suggested, vec!["Main Auditorium"]);
    }

    #[test]
    fn test_unknown_event_type_uses_fallback_kinds() {
        let suggested = suggest_venues("hackathon", 20, &catalog());

        assert_eq!(
            suggested,
            vec!["Room 101", "Conference Room", "Main Auditorium"]
        );
    }

    #[test]
    fn test_technical_events_get_labs() {
        let suggested = suggest_venues("technical", 30, &catalog());
        assert_eq!(suggested, vec!["Lab Block 1"]);
    }
}
