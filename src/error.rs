use thiserror::Error;

pub type Result<T> = std::result::Result<T, StaffError>;

#[derive(Debug, Error)]
pub enum StaffError {
    #[error("Staff profile not found: {0}")]
    ProfileNotFound(String),

    #[error("Staff source not initialized")]
    SourceNotInitialized,

    #[error("Invalid seniority range [{min}, {max}]: bounds must satisfy 0 <= min <= max <= 50")]
    InvalidSeniorityRange { min: f64, max: f64 },

    #[error("Invalid sort key: {0}")]
    InvalidSortKey(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Telemetry error: {0}")]
    TelemetryError(String),
}
