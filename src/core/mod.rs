// Core algorithm exports
pub mod calendar;
pub mod checks;
pub mod classifier;
pub mod constraints;
pub mod features;
pub mod ranker;
pub mod scoring;
pub mod slots;
pub mod venues;

pub use calendar::{is_weekend, CalendarData};
pub use checks::day_rejections;
pub use classifier::{MinMaxScaler, ModelError, PriorityModel};
pub use constraints::resolve_cutoff;
pub use features::{days_until_event, extract_features, FEATURE_DIM};
pub use ranker::{Ranker, ScoreStrategy};
pub use scoring::{priority_from_rule_score, rule_score};
pub use slots::SlotFinder;
pub use venues::{preferred_kinds, suggest_venues};
