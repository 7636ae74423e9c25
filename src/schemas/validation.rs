use jsonschema::{Draft, JSONSchema};
use serde_json::Value;

use super::schema::plan_schema;
use crate::error::{PlannerError, Result};

const MAX_SCHEMA_ERRORS: usize = 3;

/// Validate a JSON document against the trip plan schema.
pub fn validate_plan(payload: &Value) -> Result<()> {
    let schema = plan_schema()?;
    let validator = JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(&schema)
        .map_err(|err| {
            PlannerError::Validation(format!(
                "Failed to prepare trip plan schema for validation: {}",
                err
            ))
        })?;

    if let Err(errors) = validator.validate(payload) {
        let mut details = Vec::new();
        let mut truncated = false;

        for (idx, error) in errors.enumerate() {
            if idx < MAX_SCHEMA_ERRORS {
                let mut path = error.instance_path.to_string();
                if path.is_empty() {
                    path = "<root>".to_string();
                }
                details.push(format!("{}: {}", path, error));
            } else {
                truncated = true;
                break;
            }
        }

        let mut detail_str = if details.is_empty() {
            "document failed schema validation".to_string()
        } else {
            details.join("; ")
        };

        if truncated {
            detail_str.push_str("; additional errors truncated");
        }

        return Err(PlannerError::Validation(format!(
            "Document is not a valid trip plan: {}",
            detail_str
        )));
    }

    Ok(())
}
