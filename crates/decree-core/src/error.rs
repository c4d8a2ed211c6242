use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecreeError {
    #[error("Invalid input: {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Date error: {0}")]
    DateError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Storage error: {0}")]
    StorageError(String),
}

impl From<serde_json::Error> for DecreeError {
    fn from(e: serde_json::Error) -> Self {
        DecreeError::SerializationError(e.to_string())
    }
}

impl From<std::io::Error> for DecreeError {
    fn from(e: std::io::Error) -> Self {
        DecreeError::StorageError(e.to_string())
    }
}
