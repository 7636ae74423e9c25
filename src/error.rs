use thiserror::Error;

/// Main error type for the planner
#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("Timeout error: {0}")]
    Timeout(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, PlannerError>;

impl PlannerError {
    /// Check if submitting the same request again could succeed
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            PlannerError::Generation(_) | PlannerError::Timeout(_) | PlannerError::Unknown(_)
        )
    }

    /// Get the error code for structured responses
    pub fn error_code(&self) -> &'static str {
        match self {
            PlannerError::Config(_) => "CONFIG_ERROR",
            PlannerError::Validation(_) => "VALIDATION_ERROR",
            PlannerError::Generation(_) => "GENERATION_ERROR",
            PlannerError::Timeout(_) => "TIMEOUT_ERROR",
            PlannerError::Serialization(_) => "SERIALIZATION_ERROR",
            PlannerError::Io(_) => "IO_ERROR",
            PlannerError::Unknown(_) => "UNKNOWN_ERROR",
        }
    }

    /// Message suitable for an error banner shown to the user
    pub fn user_message(&self) -> String {
        match self {
            PlannerError::Generation(message) | PlannerError::Timeout(message) => {
                format!("Failed to generate itinerary: {}", message)
            }
            PlannerError::Validation(message) => message.clone(),
            other => other.to_string(),
        }
    }

    /// Convert to a structured error payload
    pub fn to_error_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.error_code(),
                "message": self.user_message(),
                "retryable": self.is_retryable()
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_error_is_wrapped_for_users() {
        let error = PlannerError::Generation("HTTP 503: overloaded".to_string());
        assert_eq!(
            error.user_message(),
            "Failed to generate itinerary: HTTP 503: overloaded"
        );
        assert!(error.is_retryable());
    }

    #[test]
    fn test_validation_error_payload() {
        let error = PlannerError::Validation("destination is required".to_string());
        let payload = error.to_error_payload();

        assert_eq!(payload["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(payload["error"]["message"], "destination is required");
        assert_eq!(payload["error"]["retryable"], false);
    }
}
