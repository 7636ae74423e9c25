use serde::Serialize;

use crate::{
    error::{PlannerError, Result},
    parser::FieldLabels,
};

/// The three required inputs collected from the user.
/// Only constructible through [`TripRequest::new`], so every instance has passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TripRequest {
    destination: String,
    duration_days: u32,
    interests: String,
}

impl TripRequest {
    /// Build a request, rejecting blank text fields and a zero-day trip.
    pub fn new(
        destination: impl Into<String>,
        duration_days: u32,
        interests: impl Into<String>,
    ) -> Result<Self> {
        let destination = destination.into().trim().to_string();
        let interests = interests.into().trim().to_string();

        let mut missing = Vec::new();
        if destination.is_empty() {
            missing.push("destination");
        }
        if duration_days == 0 {
            missing.push("duration");
        }
        if interests.is_empty() {
            missing.push("interests");
        }

        if !missing.is_empty() {
            return Err(PlannerError::Validation(format!(
                "Please fill in all required fields: {}",
                missing.join(", ")
            )));
        }

        Ok(Self {
            destination,
            duration_days,
            interests,
        })
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn duration_days(&self) -> u32 {
        self.duration_days
    }

    pub fn interests(&self) -> &str {
        &self.interests
    }
}

/// Build the instruction sent to the model.
///
/// The markdown layout requested here is exactly what [`crate::ItineraryParser`]
/// understands when configured with the same `labels`.
pub fn build_itinerary_prompt(request: &TripRequest, labels: &FieldLabels) -> String {
    let day_block = |day: u32| {
        format!(
            "## Day {day}: [YYYY-MM-DD or short description of the day]\n\
             - **[Time or order] [Place/activity name]**\n\
             \x20 - [Short description of the activity or place]\n\
             \x20 - {hours}: [Opening - closing time, e.g. 09:00 - 17:00]\n\
             \x20 - {cost}: [Local currency + amount, e.g. IDR 50.000]\n\
             \x20 - {link}: [Ticket or booking name]\n",
            day = day,
            hours = labels.opening_hours,
            cost = labels.estimated_cost,
            link = labels.price_check_link,
        )
    };

    format!(
        "You are a professional, helpful and creative AI travel planner.\n\
         Create a detailed day-by-day itinerary for a {days}-day trip to {destination}.\n\
         Take my interests into account: {interests}.\n\
         Use current, real-world information to suggest activities, attractions and cost estimates.\n\
         Include opening/closing hours, estimated costs in the local currency (for example IDR 50.000) \
         and a \"{link}: [Product/Service name]\" line as a placeholder for a price-check button.\n\
         \n\
         Format your answer *strictly* as the following Markdown:\n\
         \n\
         # Travel plan for {destination}\n\
         \n\
         {first}\n\
         {second}\n\
         ...and so on for all {days} days.\n",
        days = request.duration_days(),
        destination = request.destination(),
        interests = request.interests(),
        link = labels.price_check_link,
        first = day_block(1),
        second = day_block(2),
    )
}
