//! Error types for motorpool

/// Main error type for motorpool operations
#[derive(Debug, thiserror::Error)]
pub enum MotorpoolError {
    #[error("Data source error: {0}")]
    DataSource(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

// Implement From conversions for common error types

impl From<mongodb::error::Error> for MotorpoolError {
    fn from(err: mongodb::error::Error) -> Self {
        Self::DataSource(err.to_string())
    }
}

impl From<bson::de::Error> for MotorpoolError {
    fn from(err: bson::de::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

impl From<serde_json::Error> for MotorpoolError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(format!("JSON error: {}", err))
    }
}

/// Result type alias for motorpool operations
pub type Result<T> = std::result::Result<T, MotorpoolError>;
