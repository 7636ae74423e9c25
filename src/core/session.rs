use tracing::{debug, info};

use crate::{
    budget::BudgetSummary,
    core::planner::Planner,
    error::Result,
    services::prompt::TripRequest,
    types::{DailyItinerary, GroundingChunk, TripPlan},
};

/// State behind one planning screen: the latest plan plus the user's budget inputs.
///
/// Each new submission discards the previous plan before generating, so stale
/// results are never shown next to new inputs.
#[derive(Debug, Clone, Default)]
pub struct TripSession {
    plan: Option<TripPlan>,
    total_budget: Option<f64>,
    duration_days: u32,
}

impl TripSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_total_budget(mut self, total_budget: Option<f64>) -> Self {
        self.total_budget = total_budget;
        self
    }

    pub fn with_duration(mut self, duration_days: u32) -> Self {
        self.duration_days = duration_days;
        self
    }

    pub fn set_total_budget(&mut self, total_budget: Option<f64>) {
        self.total_budget = total_budget;
    }

    pub fn total_budget(&self) -> Option<f64> {
        self.total_budget
    }

    pub fn duration_days(&self) -> u32 {
        self.duration_days
    }

    pub fn plan(&self) -> Option<&TripPlan> {
        self.plan.as_ref()
    }

    pub fn itinerary(&self) -> &[DailyItinerary] {
        self.plan
            .as_ref()
            .map(|plan| plan.itinerary.as_slice())
            .unwrap_or_default()
    }

    pub fn citations(&self) -> &[GroundingChunk] {
        self.plan
            .as_ref()
            .map(|plan| plan.citations.as_slice())
            .unwrap_or_default()
    }

    /// Replace the current plan wholesale.
    pub fn replace_plan(&mut self, plan: TripPlan) {
        info!(
            days = plan.itinerary.len(),
            activities = plan.activity_count(),
            "session plan replaced"
        );
        self.plan = Some(plan);
    }

    pub fn clear(&mut self) {
        self.plan = None;
    }

    /// Run one generation round for `request`.
    ///
    /// The previous plan is dropped first; on failure the session is left empty and
    /// ready for another attempt.
    pub async fn submit(&mut self, planner: &Planner, request: &TripRequest) -> Result<()> {
        self.clear();
        self.duration_days = request.duration_days();

        let plan = planner.plan(request).await?;
        self.replace_plan(plan);
        Ok(())
    }

    /// Set or clear the actual cost of the activity at `index` in day `day`.
    ///
    /// Returns whether an activity was addressed. With a plan loaded, non-finite amounts are rejected.
    pub fn set_actual_cost(&mut self, day: u32, index: usize, cost: Option<f64>) -> Result<bool> {
        let Some(plan) = self.plan.as_mut() else {
            debug!(day, index, "cost edit ignored: no plan loaded");
            return Ok(false);
        };
        plan.set_actual_cost(day, index, cost)
    }

    /// Budget figures for the current state.
    pub fn budget(&self) -> BudgetSummary {
        BudgetSummary::compute(self.itinerary(), self.total_budget, self.duration_days)
    }
}
