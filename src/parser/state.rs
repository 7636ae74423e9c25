use tracing::trace;

use super::line::LineKind;
use crate::types::{Activity, DailyItinerary};

/// Where the parser stands between two lines.
///
/// The open day and activity are owned by the state and only leave it through
/// [`ParserState::finish`] or a transition that closes them.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ParserState {
    /// No day heading seen yet; everything is discarded.
    #[default]
    AwaitingDay,
    /// A day is open but no activity has started.
    InDay(DailyItinerary),
    /// An activity is open inside a day.
    InActivity {
        day: DailyItinerary,
        activity: Activity,
    },
}

impl ParserState {
    /// Apply one classified line, pushing any day it closes into `output`.
    pub fn advance(self, line: LineKind<'_>, output: &mut Vec<DailyItinerary>) -> ParserState {
        if let LineKind::DayHeading { day, date } = line {
            self.finish(output);
            return ParserState::InDay(DailyItinerary::new(day, date));
        }

        if line == LineKind::OversizedDayHeading {
            // Still a day boundary: close what is open and drop lines until the next heading.
            trace!("closing open records at day heading with oversized number");
            self.finish(output);
            return ParserState::AwaitingDay;
        }

        match (self, line) {
            (ParserState::AwaitingDay, line) => {
                trace!(?line, "discarding line before first day heading");
                ParserState::AwaitingDay
            }

            (ParserState::InDay(day), LineKind::ActivityHeading { name, description }) => {
                ParserState::InActivity {
                    day,
                    activity: Activity::new(name, description),
                }
            }

            (ParserState::InDay(day), line) => {
                trace!(?line, day = day.day, "discarding line outside an activity");
                ParserState::InDay(day)
            }

            (
                ParserState::InActivity { mut day, activity },
                LineKind::ActivityHeading { name, description },
            ) => {
                day.activities.push(activity);
                ParserState::InActivity {
                    day,
                    activity: Activity::new(name, description),
                }
            }

            (ParserState::InActivity { day, mut activity }, line) => {
                apply_field(&mut activity, line);
                ParserState::InActivity { day, activity }
            }
        }
    }

    /// Close whatever is open, in order: activity into its day, day into `output`.
    pub fn finish(self, output: &mut Vec<DailyItinerary>) {
        match self {
            ParserState::AwaitingDay => {}
            ParserState::InDay(day) => output.push(day),
            ParserState::InActivity { mut day, activity } => {
                day.activities.push(activity);
                output.push(day);
            }
        }
    }
}

fn apply_field(activity: &mut Activity, line: LineKind<'_>) {
    match line {
        LineKind::OpeningHours(value) => activity.opening_hours = value.to_string(),
        LineKind::EstimatedCost(value) => activity.estimated_cost = value.to_string(),
        LineKind::PriceCheckLink(value) => activity.check_price_link = Some(value.to_string()),
        // First description wins; later plain bullets are dropped.
        LineKind::Bullet(text) if activity.description.is_empty() => {
            activity.description = text.to_string();
        }
        other => trace!(line = ?other, activity = %activity.name, "ignoring line"),
    }
}
