pub mod generation;
pub mod planner;
pub mod session;

pub use generation::{Generation, GenerationClient};
pub use planner::Planner;
pub use session::TripSession;
