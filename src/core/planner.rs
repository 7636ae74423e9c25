use std::sync::Arc;

use tracing::{info, warn};

use crate::{
    core::generation::GenerationClient,
    error::Result,
    parser::{FieldLabels, ItineraryParser},
    services::{gemini_client::GeminiClient, prompt::TripRequest},
    types::TripPlan,
};

/// Generation + parsing pipeline.
#[derive(Debug, Clone)]
pub struct Planner {
    client: Arc<dyn GenerationClient>,
    parser: ItineraryParser,
}

impl Planner {
    pub fn new(client: impl GenerationClient + 'static) -> Self {
        Self {
            client: Arc::new(client),
            parser: ItineraryParser::new(),
        }
    }

    /// Planner backed by [`GeminiClient::from_env`].
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(GeminiClient::from_env()?))
    }

    /// Labels the parser should expect. The client's prompt must use the same set.
    pub fn with_labels(mut self, labels: FieldLabels) -> Self {
        self.parser = self.parser.with_labels(labels);
        self
    }

    pub fn parser(&self) -> &ItineraryParser {
        &self.parser
    }

    /// Generate once and parse the result. Actual costs start unset.
    pub async fn plan(&self, request: &TripRequest) -> Result<TripPlan> {
        let generation = self.client.generate(request).await?;
        let itinerary = self.parser.parse(&generation.raw_text);

        if itinerary.is_empty() {
            warn!(
                bytes = generation.raw_text.len(),
                "no day headings recognized in model output"
            );
        }
        info!(
            days = itinerary.len(),
            citations = generation.citations.len(),
            "itinerary ready"
        );

        Ok(TripPlan::new(itinerary, generation.citations))
    }
}
