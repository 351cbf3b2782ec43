use crate::core::CalendarData;
use crate::models::VenueInfo;
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading the spreadsheet tables
#[derive(Debug, Error)]
pub enum TableError {
    #[error("Failed to read {file}: {source}")]
    Csv {
        file: String,
        #[source]
        source: csv::Error,
    },

    #[error("Bad date '{value}' in {file}")]
    BadDate { file: String, value: String },
}

#[derive(Debug, Deserialize)]
struct HolidayRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Occasion", default)]
    occasion: String,
}

#[derive(Debug, Deserialize)]
struct ExamRow {
    #[serde(rename = "Start Date")]
    start: String,
    #[serde(rename = "End Date")]
    end: String,
}

#[derive(Debug, Deserialize)]
struct AvailabilityRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Venue Name")]
    venue: String,
    #[serde(rename = "Is Available")]
    available: String,
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    #[serde(rename = "Venue Name")]
    name: String,
    #[serde(rename = "Capacity")]
    capacity: i64,
    #[serde(rename = "Type")]
    kind: String,
}

/// Read-only calendar tables plus the venue catalog
///
/// Loaded once at startup and shared across requests; the scheduling core
/// only ever sees the resulting in-memory data.
#[derive(Debug, Clone)]
pub struct CalendarStore {
    pub calendar: CalendarData,
    pub venues: Vec<VenueInfo>,
}

impl CalendarStore {
    /// Load the holiday, exam, venue-availability, and venue-catalog tables
    pub fn load<P: AsRef<Path>>(
        holidays_file: P,
        exams_file: P,
        availability_file: P,
        venues_file: P,
    ) -> Result<Self, TableError> {
        let mut calendar = CalendarData::new();

        for row in read_rows::<HolidayRow, _>(&holidays_file)? {
            let date = parse_date(&holidays_file, &row.date)?;
            calendar.add_holiday(date, &row.occasion);
        }

        for row in read_rows::<ExamRow, _>(&exams_file)? {
            let start = parse_date(&exams_file, &row.start)?;
            let end = parse_date(&exams_file, &row.end)?;
            calendar.add_exam_range(start, end);
        }

        for row in read_rows::<AvailabilityRow, _>(&availability_file)? {
            let date = parse_date(&availability_file, &row.date)?;
            calendar.set_venue_availability(date, &row.venue, truthy(&row.available));
        }

        let venues = read_rows::<CatalogRow, _>(&venues_file)?
            .into_iter()
            .map(|row| VenueInfo {
                name: row.name,
                capacity: row.capacity,
                kind: row.kind,
            })
            .collect();

        Ok(Self { calendar, venues })
    }
}

fn read_rows<T: for<'de> Deserialize<'de>, P: AsRef<Path>>(path: P) -> Result<Vec<T>, TableError> {
    let file = path.as_ref().display().to_string();
    let mut reader = csv::Reader::from_path(path.as_ref()).map_err(|source| TableError::Csv {
        file: file.clone(),
        source,
    })?;

    reader
        .deserialize()
        .map(|row| {
            row.map_err(|source| TableError::Csv {
                file: file.clone(),
                source,
            })
        })
        .collect()
}

fn parse_date<P: AsRef<Path>>(path: &P, value: &str) -> Result<NaiveDate, TableError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| TableError::BadDate {
        file: path.as_ref().display().to_string(),
        value: value.to_string(),
    })
}

/// Spreadsheet exports spell booleans several ways
fn truthy(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "true" | "1" | "yes" | "y"
    )
}
