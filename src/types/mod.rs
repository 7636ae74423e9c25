pub mod grounding;
pub mod itinerary;

pub use grounding::{
    citation_links, CitationKind, CitationLink, GroundingChunk, PlaceAnswerSources, PlaceSource,
    ReviewSnippet, WebSource,
};
pub use itinerary::{Activity, DailyItinerary, TripPlan, NOT_AVAILABLE};
