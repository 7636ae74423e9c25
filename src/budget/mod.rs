//! Estimated versus actual spend.

pub mod currency;

pub use currency::parse_currency_to_number;

use serde::{Deserialize, Serialize};

use crate::types::DailyItinerary;

/// Budget figures derived from the current itinerary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSummary {
    /// Sum of every activity's estimated cost
    pub total_estimated: f64,
    /// Sum of the actual costs the user has entered
    pub total_actual: f64,
    /// Total budget supplied by the user
    pub total_budget: Option<f64>,
    /// `total_budget - total_actual`, when a budget is known
    pub remaining: Option<f64>,
    /// `remaining / duration_days`, when both are available
    pub average_daily_remaining: Option<f64>,
}

impl BudgetSummary {
    /// Fold the itinerary into totals. Pure; call again after every cost edit.
    pub fn compute(
        itinerary: &[DailyItinerary],
        total_budget: Option<f64>,
        duration_days: u32,
    ) -> Self {
        let activities = itinerary.iter().flat_map(|day| day.activities.iter());

        let (total_estimated, total_actual) =
            activities.fold((0.0, 0.0), |(estimated, actual), activity| {
                (
                    estimated + parse_currency_to_number(&activity.estimated_cost),
                    // Unset actual costs are skipped, not counted as zero spend.
                    match activity.actual_cost {
                        Some(cost) => actual + cost,
                        None => actual,
                    },
                )
            });

        let remaining = total_budget.map(|budget| budget - total_actual);
        let average_daily_remaining = remaining
            .filter(|_| duration_days > 0)
            .map(|remaining| remaining / f64::from(duration_days));

        Self {
            total_estimated,
            total_actual,
            total_budget,
            remaining,
            average_daily_remaining,
        }
    }

    /// True when actual spend has gone past the budget.
    pub fn is_over_budget(&self) -> bool {
        self.remaining.is_some_and(|remaining| remaining < 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Activity;

    fn activity(estimated: &str, actual: Option<f64>) -> Activity {
        let mut activity = Activity::new("x", "");
        activity.estimated_cost = estimated.to_string();
        activity.actual_cost = actual;
        activity
    }

    fn itinerary() -> Vec<DailyItinerary> {
        let mut day_one = DailyItinerary::new(1, "a");
        day_one.activities.push(activity("USD 60", Some(25.0)));
        day_one.activities.push(activity("N/A", None));
        let mut day_two = DailyItinerary::new(2, "b");
        day_two.activities.push(activity("USD 40", Some(15.0)));
        vec![day_one, day_two]
    }

    #[test]
    fn test_remaining_and_daily_average() {
        let summary = BudgetSummary::compute(&itinerary(), Some(200.0), 5);

        assert_eq!(summary.total_estimated, 100.0);
        assert_eq!(summary.total_actual, 40.0);
        assert_eq!(summary.remaining, Some(160.0));
        assert_eq!(summary.average_daily_remaining, Some(32.0));
        assert!(!summary.is_over_budget());
    }

    #[test]
    fn test_without_budget() {
        let summary = BudgetSummary::compute(&itinerary(), None, 5);

        assert_eq!(summary.total_budget, None);
        assert_eq!(summary.remaining, None);
        assert_eq!(summary.average_daily_remaining, None);
    }

    #[test]
    fn test_zero_duration_has_no_average() {
        let summary = BudgetSummary::compute(&itinerary(), Some(200.0), 0);

        assert_eq!(summary.remaining, Some(160.0));
        assert_eq!(summary.average_daily_remaining, None);
    }

    #[test]
    fn test_over_budget() {
        let summary = BudgetSummary::compute(&itinerary(), Some(30.0), 2);

        assert_eq!(summary.remaining, Some(-10.0));
        assert_eq!(summary.average_daily_remaining, Some(-5.0));
        assert!(summary.is_over_budget());
    }

    #[test]
    fn test_empty_itinerary() {
        let summary = BudgetSummary::compute(&[], Some(100.0), 4);

        assert_eq!(summary.total_estimated, 0.0);
        assert_eq!(summary.total_actual, 0.0);
        assert_eq!(summary.average_daily_remaining, Some(25.0));
    }
}
