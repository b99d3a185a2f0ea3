use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpamError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("Training failed: {0}")]
    Training(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] bincode::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Coarse error category reported to API clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    ModelUnavailable,
    Training,
    Internal,
}

impl SpamError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SpamError::Validation(_) => ErrorKind::Validation,
            SpamError::ModelUnavailable(_) => ErrorKind::ModelUnavailable,
            SpamError::Training(_) | SpamError::Config(_) => ErrorKind::Training,
            SpamError::Io(_)
            | SpamError::Serialization(_)
            | SpamError::Json(_)
            | SpamError::Internal(_) => ErrorKind::Internal,
        }
    }
}

pub type Result<T> = std::result::Result<T, SpamError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(SpamError::Validation("x".into()).kind(), ErrorKind::Validation);
        assert_eq!(
            SpamError::ModelUnavailable("x".into()).kind(),
            ErrorKind::ModelUnavailable
        );
        assert_eq!(SpamError::Training("x".into()).kind(), ErrorKind::Training);
        assert_eq!(SpamError::Config("x".into()).kind(), ErrorKind::Training);
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk");
        assert_eq!(SpamError::from(io).kind(), ErrorKind::Internal);
    }
}
