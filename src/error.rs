use thiserror::Error;

/// Request rejected before it reaches the scorer
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("invalid fields: {0}")]
    Fields(#[from] validator::ValidationErrors),

    #[error("too many candidates: {count} (max {max})")]
    TooManyCandidates { count: usize, max: usize },
}

/// Startup and configuration failures
#[derive(Error, Debug)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("invalid scoring weights: {0}")]
    InvalidWeights(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::TooManyCandidates { count: 1001, max: 1000 };
        assert_eq!(err.to_string(), "too many candidates: 1001 (max 1000)");

        let err = AppError::InvalidWeights("hobbies must be finite".to_string());
        assert_eq!(err.to_string(), "invalid scoring weights: hobbies must be finite");
    }
}
