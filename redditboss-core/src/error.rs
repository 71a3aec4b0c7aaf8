use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error(transparent)]
    AnalysisApi(#[from] AnalysisApiError),

    #[error(transparent)]
    Network(#[from] reqwest::Error),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Failure responses from the analysis backend. `Display` is shown to the
/// user unmodified.
#[derive(Error, Debug, Clone)]
pub enum AnalysisApiError {
    #[error("{detail}")]
    Backend { detail: String, status_code: u16 },

    #[error("HTTP error! status: {status_code}")]
    Http { status_code: u16 },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration file {path}: {reason}")]
    Unreadable { path: String, reason: String },

    #[error("Invalid configuration format: {details}")]
    InvalidFormat { details: String },

    #[error("Configuration validation failed: {reason}")]
    ValidationFailed { reason: String },
}
