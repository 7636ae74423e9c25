use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{error::Result, services::prompt::TripRequest, types::GroundingChunk};

/// Raw output of one generation call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Generation {
    /// Markdown text as returned by the model
    pub raw_text: String,
    /// Grounding chunks, in provider order
    pub citations: Vec<GroundingChunk>,
}

/// Anything that can turn a trip request into itinerary markdown.
///
/// Implementations make a single attempt and report provider failures as
/// [`crate::PlannerError::Generation`].
#[async_trait]
pub trait GenerationClient: Send + Sync + std::fmt::Debug {
    async fn generate(&self, request: &TripRequest) -> Result<Generation>;
}
