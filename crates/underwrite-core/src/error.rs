use thiserror::Error;

#[derive(Debug, Error)]
pub enum UnderwriteError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Scenario not found: {0}")]
    ScenarioNotFound(String),
}

impl From<serde_json::Error> for UnderwriteError {
    fn from(e: serde_json::Error) -> Self {
        UnderwriteError::SerializationError(e.to_string())
    }
}
