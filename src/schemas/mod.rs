//! JSON schema for exported trip plans.

pub mod schema;
pub mod validation;

pub use schema::plan_schema;
pub use validation::validate_plan;
