//! Line-oriented parser for the markdown itinerary produced by the model.
//!
//! The expected document looks like:
//!
//! ```text
//! ## Day 1: 2024-01-01
//! - **Morning Visit Temple**: see the old temple
//! - Jam Buka/Tutup: 08:00 - 17:00
//! - Estimasi Biaya: IDR 20.000
//! - Link Cek Harga: Temple Ticket
//! ```
//!
//! Parsing is best-effort: lines that do not fit are skipped and whatever could be
//! recognized is returned, possibly nothing.

pub mod labels;
pub mod line;
pub mod state;

pub use labels::FieldLabels;
pub use line::{classify, LineKind};
pub use state::ParserState;

use tracing::debug;

use crate::types::DailyItinerary;

/// Converts model output into day records.
#[derive(Debug, Clone, Default)]
pub struct ItineraryParser {
    labels: FieldLabels,
}

impl ItineraryParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_labels(mut self, labels: FieldLabels) -> Self {
        self.labels = labels;
        self
    }

    pub fn labels(&self) -> &FieldLabels {
        &self.labels
    }

    /// Parse a markdown document. Never fails.
    pub fn parse(&self, markdown: &str) -> Vec<DailyItinerary> {
        let mut itinerary = Vec::new();

        let state = markdown
            .split('\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .fold(ParserState::AwaitingDay, |state, line| {
                state.advance(classify(line, &self.labels), &mut itinerary)
            });
        state.finish(&mut itinerary);

        debug!(
            days = itinerary.len(),
            activities = itinerary.iter().map(|d| d.activities.len()).sum::<usize>(),
            "parsed itinerary"
        );
        itinerary
    }
}

/// Parse with the default (Indonesian) field labels.
pub fn parse_itinerary(markdown: &str) -> Vec<DailyItinerary> {
    ItineraryParser::new().parse(markdown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Activity;

    const SAMPLE: &str = "## Day 1: 2024-01-01
- **Morning Visit Temple**: see the old temple
- Jam Buka/Tutup: 08:00 - 17:00
- Estimasi Biaya: IDR 20.000
- Link Cek Harga: Temple Ticket
";

    #[test]
    fn test_single_activity_example() {
        let parsed = parse_itinerary(SAMPLE);

        let expected = vec![DailyItinerary {
            day: 1,
            date: "2024-01-01".to_string(),
            activities: vec![Activity {
                name: "Morning Visit Temple".to_string(),
                description: "see the old temple".to_string(),
                opening_hours: "08:00 - 17:00".to_string(),
                estimated_cost: "IDR 20.000".to_string(),
                check_price_link: Some("Temple Ticket".to_string()),
                actual_cost: None,
            }],
        }];
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_itinerary("").is_empty());
        assert!(parse_itinerary("\n\n   \n").is_empty());
    }

    #[test]
    fn test_no_day_headings() {
        let text = "# Trip to Bali\n- **Temple**: nice\n- Estimasi Biaya: IDR 5.000";
        assert!(parse_itinerary(text).is_empty());
    }

    #[test]
    fn test_nested_indented_fields() {
        let text = "## Day 1: Arrival
- **10:00 Check in**
    - Drop bags at the hotel
    - Jam Buka/Tutup: 24 jam
    - Estimasi Biaya: IDR 0";
        let parsed = parse_itinerary(text);

        let activity = &parsed[0].activities[0];
        assert_eq!(activity.name, "10:00 Check in");
        assert_eq!(activity.description, "Drop bags at the hotel");
        assert_eq!(activity.opening_hours, "24 jam");
        assert_eq!(activity.estimated_cost, "IDR 0");
    }

    #[test]
    fn test_labeled_field_is_not_taken_as_description() {
        let text = "## Day 1: x
- **Temple**
- Estimasi Biaya: IDR 20.000
- the description comes last";
        let parsed = parse_itinerary(text);

        let activity = &parsed[0].activities[0];
        assert_eq!(activity.estimated_cost, "IDR 20.000");
        assert_eq!(activity.description, "the description comes last");
    }

    #[test]
    fn test_crlf_line_endings() {
        let parsed = parse_itinerary(&SAMPLE.replace('\n', "\r\n"));
        assert_eq!(parsed, parse_itinerary(SAMPLE));
    }

    #[test]
    fn test_english_labels() {
        let parser = ItineraryParser::new().with_labels(FieldLabels::english());
        let parsed = parser.parse("## Day 1: x\n- **Museum**\n- Estimated Cost: EUR 12");

        assert_eq!(parsed[0].activities[0].estimated_cost, "EUR 12");
    }
}
