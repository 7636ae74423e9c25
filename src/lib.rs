//! trip-planner-rs: turn an LLM's free-text travel plan into typed itinerary records
//!
//! The crate asks a generative model for a multi-day plan in a fixed markdown layout,
//! parses that text into day and activity records, and keeps estimated and actual
//! spend side by side.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use trip_planner_rs::{Planner, TripRequest, TripSession};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let planner = Planner::from_env()?;
//!     let request = TripRequest::new("Bali", 3, "temples, street food")?;
//!
//!     let mut session = TripSession::new().with_total_budget(Some(2_000_000.0));
//!     session.submit(&planner, &request).await?;
//!     session.set_actual_cost(1, 0, Some(25_000.0))?;
//!
//!     println!("{:?}", session.budget());
//!     Ok(())
//! }
//! ```
//!
//! Parsing alone needs no network:
//!
//! ```rust
//! let days = trip_planner_rs::parse_itinerary("## Day 1: Arrival\n- **Check in**");
//! assert_eq!(days[0].activities[0].name, "Check in");
//! ```

pub mod budget;
pub mod core;
pub mod error;
pub mod parser;
pub mod schemas;
pub mod services;
pub mod types;

pub use crate::core::{Generation, GenerationClient, Planner, TripSession};
pub use budget::{parse_currency_to_number, BudgetSummary};
pub use error::{PlannerError, Result};
pub use parser::{parse_itinerary, FieldLabels, ItineraryParser};
pub use services::{build_itinerary_prompt, GeminiClient, TripRequest};
pub use types::{
    citation_links, Activity, CitationLink, DailyItinerary, GroundingChunk, TripPlan,
};

#[cfg(feature = "cli")]
pub mod cli;
