pub mod gemini_client;
pub mod prompt;

pub use gemini_client::GeminiClient;
pub use prompt::{build_itinerary_prompt, TripRequest};
