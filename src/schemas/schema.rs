use schemars::{gen::SchemaSettings, schema::RootSchema};
use serde_json::Value;

use crate::{error::Result, types::TripPlan};

/// Draft-07 schema describing a serialized [`TripPlan`].
pub fn plan_schema() -> Result<Value> {
    Ok(serde_json::to_value(plan_root_schema())?)
}

fn plan_root_schema() -> RootSchema {
    let mut root = SchemaSettings::draft07()
        .into_generator()
        .into_root_schema_for::<TripPlan>();

    let metadata = root.schema.metadata();
    if metadata.title.is_none() {
        metadata.title = Some("TripPlan".to_string());
    }
    root
}
