use crate::error::*;
use tracing::{error, warn};

pub trait ErrorExt {
    fn log_error(&self) -> &Self;
    fn log_warn(&self) -> &Self;
    fn error_code(&self) -> String;
}

impl ErrorExt for CoreError {
    fn log_error(&self) -> &Self {
        error!("CoreError: {}", self);
        match self {
            CoreError::AnalysisApi(e) => {
                error!("Analysis API error details: {:?}", e);
            }
            CoreError::Config(e) => {
                error!("Configuration error details: {:?}", e);
            }
            _ => {}
        }
        self
    }

    fn log_warn(&self) -> &Self {
        warn!("CoreError (warning): {}", self);
        self
    }

    fn error_code(&self) -> String {
        match self {
            CoreError::AnalysisApi(_) => "ANALYSIS_API",
            CoreError::Network(_) => "NETWORK",
            CoreError::Serialization(_) => "SERIALIZATION",
            CoreError::Config(_) => "CONFIG",
            CoreError::Internal { .. } => "INTERNAL",
        }
        .to_string()
    }
}
