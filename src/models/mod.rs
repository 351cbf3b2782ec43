// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    EventRecord, EventRequest, ExtractedEvent, Priority, RankedEvent, RuleWeights, SkipReason,
    SlotResult, VenueInfo,
};
pub use requests::{PrioritizeRequest, SuggestDateRequest};
pub use responses::{
    ErrorResponse, HealthResponse, SuggestDateResponse, VenueCriteria, VenueSuggestions,
};
