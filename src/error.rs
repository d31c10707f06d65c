//! Error types for the demand intake service.

/// Top-level error type for the intake pipeline.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Forward error: {0}")]
    Forward(#[from] ForwardError),
}

/// Submission validation errors. Always client-correctable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// One or more required fields were empty after trimming.
    /// Carries every missing field name, not just the first.
    #[error("Required fields missing: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("Invalid corporate email address")]
    InvalidEmail,
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Errors from relaying a record to the downstream webhook.
#[derive(Debug, thiserror::Error)]
pub enum ForwardError {
    /// The webhook answered with a non-success status.
    /// `detail` is the response body, truncated to the diagnostic bound.
    #[error("Downstream webhook rejected the record (status {status})")]
    Rejected { status: u16, detail: String },

    /// Transport-level failure: unreachable endpoint, timeout, body read error.
    #[error("Transport error: {0}")]
    Transport(String),
}

/// Result type alias for the intake pipeline.
pub type Result<T> = std::result::Result<T, IntakeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_lists_every_name() {
        let err = ValidationError::MissingFields(vec!["email".into(), "aplicacao".into()]);
        assert_eq!(err.to_string(), "Required fields missing: email, aplicacao");
    }

    #[test]
    fn rejected_error_shows_status() {
        let err = ForwardError::Rejected {
            status: 500,
            detail: "Internal Flow Error".into(),
        };
        assert!(err.to_string().contains("500"));
    }
}
