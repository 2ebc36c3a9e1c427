use std::any::Any;

use seglist_error::{ErrorExt, StatusCode};
use thiserror::Error;

pub type HarnessResult<T> = Result<T, HarnessError>;

/// Ошибки обвязки: настройки, логирование, отчёт.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid setting '{name}': {reason}")]
    InvalidSetting { name: &'static str, reason: String },

    #[error("Logging initialization failed: {0}")]
    Logging(String),

    #[error("Report serialization failed: {0}")]
    Report(#[from] serde_json::Error),
}

impl ErrorExt for HarnessError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Config(_) | Self::InvalidSetting { .. } => StatusCode::InvalidConfig,
            Self::Logging(_) => StatusCode::Internal,
            Self::Report(_) => StatusCode::Unexpected,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
