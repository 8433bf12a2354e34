//! Configuration validation errors and semantic validation.

use poisson_math::PoissonError;
use thiserror::Error;

use crate::model::ModelConfig;
use crate::{CONFIG_SCHEMA_VERSION, MAX_DISPLAY_PRECISION};

/// Validation result type.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Configuration validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Version mismatch: expected {expected}, got {actual}")]
    VersionMismatch { expected: String, actual: String },

    #[error("Model construction failed: {0}")]
    Model(#[from] PoissonError),
}

impl ValidationError {
    /// Error code for structured error reporting.
    ///
    /// Model errors reuse the code of the underlying [`PoissonError`].
    pub fn code(&self) -> u32 {
        match self {
            ValidationError::IoError(_) => 60,
            ValidationError::ParseError(_) => 61,
            ValidationError::InvalidValue { .. } => 65,
            ValidationError::VersionMismatch { .. } => 66,
            ValidationError::Model(err) => err.code(),
        }
    }
}

/// Validate a model configuration semantically.
pub fn validate_config(config: &ModelConfig) -> ValidationResult<()> {
    if config.schema_version != CONFIG_SCHEMA_VERSION {
        return Err(ValidationError::VersionMismatch {
            expected: CONFIG_SCHEMA_VERSION.to_string(),
            actual: config.schema_version.clone(),
        });
    }

    if !config.default_lambtha.is_finite() || config.default_lambtha <= 0.0 {
        return Err(ValidationError::InvalidValue {
            field: "default_lambtha".to_string(),
            message: format!("Must be positive, got {}", config.default_lambtha),
        });
    }

    if config.display_precision > MAX_DISPLAY_PRECISION {
        return Err(ValidationError::InvalidValue {
            field: "display_precision".to_string(),
            message: format!(
                "Must be at most {}, got {}",
                MAX_DISPLAY_PRECISION, config.display_precision
            ),
        });
    }

    Ok(())
}
