use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::grounding::GroundingChunk;
use crate::error::{PlannerError, Result};

/// Placeholder used for fields the model did not provide.
pub const NOT_AVAILABLE: &str = "N/A";

/// A single planned activity within a day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Activity name taken from the bold span of the bullet, usually prefixed with a time
    pub name: String,
    /// Short description; empty when the model gave none
    pub description: String,
    /// Opening/closing hours as written by the model, "N/A" if absent
    pub opening_hours: String,
    /// Estimated cost as free text (currency and amount), "N/A" if absent
    pub estimated_cost: String,
    /// Name of the ticket or booking to look up a price for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_price_link: Option<String>,
    /// Amount actually spent, entered by the user; `None` until set
    #[serde(default)]
    pub actual_cost: Option<f64>,
}

impl Activity {
    /// Create an activity with every optional field defaulted.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            opening_hours: NOT_AVAILABLE.to_string(),
            estimated_cost: NOT_AVAILABLE.to_string(),
            check_price_link: None,
            actual_cost: None,
        }
    }
}

/// One day of the itinerary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DailyItinerary {
    /// Day number exactly as written in the heading
    pub day: u32,
    /// Free-text date or description of the day
    pub date: String,
    /// Activities in the order they appeared
    #[serde(default)]
    pub activities: Vec<Activity>,
}

impl DailyItinerary {
    pub fn new(day: u32, date: impl Into<String>) -> Self {
        Self {
            day,
            date: date.into(),
            activities: Vec::new(),
        }
    }
}

/// Outcome of one generation round: parsed days plus the citations that came with them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TripPlan {
    /// Parsed day records in heading order
    #[serde(default)]
    pub itinerary: Vec<DailyItinerary>,
    /// Grounding chunks returned by the provider, passed through as-is
    #[serde(default)]
    pub citations: Vec<GroundingChunk>,
}

impl TripPlan {
    pub fn new(itinerary: Vec<DailyItinerary>, citations: Vec<GroundingChunk>) -> Self {
        Self {
            itinerary,
            citations,
        }
    }

    /// True when nothing could be recognized in the model output.
    pub fn is_empty(&self) -> bool {
        self.itinerary.is_empty()
    }

    pub fn activity_count(&self) -> usize {
        self.itinerary.iter().map(|day| day.activities.len()).sum()
    }

    /// Replace the actual cost of the activity at `index` within every day numbered `day`.
    ///
    /// Addressing is positional: reordering activities invalidates indices handed out
    /// earlier. Unknown day numbers or out-of-range indices leave the plan untouched.
    /// Returns whether any activity was updated; non-finite amounts are rejected.
    pub fn set_actual_cost(&mut self, day: u32, index: usize, cost: Option<f64>) -> Result<bool> {
        if let Some(value) = cost.filter(|value| !value.is_finite()) {
            return Err(PlannerError::Validation(format!(
                "actual cost must be a finite number, got {}",
                value
            )));
        }

        let mut updated = false;
        for day_plan in self.itinerary.iter_mut().filter(|d| d.day == day) {
            if let Some(activity) = day_plan.activities.get_mut(index) {
                activity.actual_cost = cost;
                updated = true;
            }
        }

        debug!(day, index, ?cost, updated, "actual cost edit applied");
        Ok(updated)
    }

    /// Validate a JSON document against the plan schema, then deserialize it.
    pub fn from_json_value(value: Value) -> Result<Self> {
        crate::schemas::validate_plan(&value)?;

        serde_path_to_error::deserialize(value).map_err(|err| {
            let path = err.path().to_string();
            PlannerError::Validation(format!("invalid trip plan at {}: {}", path, err))
        })
    }
}
