// Criterion benchmarks for Eventra Algo

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use eventra_algo::core::{CalendarData, Ranker, SlotFinder};
use eventra_algo::models::{EventRecord, EventRequest};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Venue open on every day of a two-month span
fn open_calendar(venue: &str) -> CalendarData {
    let mut calendar = CalendarData::new();
    let mut current = day(2026, 8, 1);
    while current <= day(2026, 9, 30) {
        calendar.set_venue_availability(current, venue, true);
        current = current.succ_opt().unwrap();
    }
    calendar
}

fn create_event(id: usize) -> EventRecord {
    let event_types = ["academic", "cultural", "sports", "workshop"];
    let venues = ["Main Auditorium", "Seminar Hall A", "Lab Block 1", "Open Grounds"];

    serde_json::from_value(serde_json::json!({
        "title": format!("Event {}", id),
        "eventType": event_types[id % event_types.len()],
        "venue": venues[id % venues.len()],
        "expected_count": 20 + (id * 37) % 380,
        "approvers": ["hod@university.edu"],
        "date": "2026-09-15",
        "createdAt": "2026-08-01",
    }))
    .unwrap()
}

fn bench_find_slot_open(c: &mut Criterion) {
    let calendar = open_calendar("Lab 1");
    let finder = SlotFinder::with_default_horizon();
    let request = EventRequest::new(2, "Lab 1", vec![], None);

    c.bench_function("find_slot_open_venue", |b| {
        b.iter(|| {
            finder.find_slot_from(
                black_box(day(2026, 8, 10)),
                black_box(&request),
                &calendar,
            )
        })
    });
}

fn bench_find_slot_exhausted(c: &mut Criterion) {
    // Unknown venue: every candidate in the horizon is rejected
    let calendar = open_calendar("Lab 1");
    let finder = SlotFinder::with_default_horizon();
    let request = EventRequest::new(2, "Observatory", vec![], None);

    c.bench_function("find_slot_exhausted_horizon", |b| {
        b.iter(|| {
            finder.find_slot_from(
                black_box(day(2026, 8, 10)),
                black_box(&request),
                &calendar,
            )
        })
    });
}

fn bench_rank(c: &mut Criterion) {
    let ranker = Ranker::with_default_weights();
    let mut group = c.benchmark_group("rank_events");

    for size in [10usize, 100, 1000] {
        let events: Vec<EventRecord> = (0..size).map(create_event).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &events, |b, events| {
            b.iter(|| ranker.rank(black_box(events.clone())))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_find_slot_open,
    bench_find_slot_exhausted,
    bench_rank
);
criterion_main!(benches);
