//! Model configuration type.
//!
//! Matches model.json:
//!
//! ```json
//! {
//!   "schema_version": "1.0.0",
//!   "default_lambtha": 2.5,
//!   "display_precision": 3
//! }
//! ```

use poisson_math::{PoissonModel, DEFAULT_DISPLAY_PRECISION, DEFAULT_LAMBTHA};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::validate::{validate_config, ValidationError, ValidationResult};
use crate::CONFIG_SCHEMA_VERSION;

/// Defaults applied when building and rendering models.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    pub schema_version: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Rate used when no sample data is supplied.
    #[serde(default = "default_lambtha")]
    pub default_lambtha: f64,

    /// Decimal places in rendered labels.
    #[serde(default = "default_display_precision")]
    pub display_precision: usize,
}

fn default_lambtha() -> f64 {
    DEFAULT_LAMBTHA
}

fn default_display_precision() -> usize {
    DEFAULT_DISPLAY_PRECISION
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            schema_version: CONFIG_SCHEMA_VERSION.to_string(),
            description: None,
            default_lambtha: DEFAULT_LAMBTHA,
            display_precision: DEFAULT_DISPLAY_PRECISION,
        }
    }
}

impl ModelConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> ValidationResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ValidationError::IoError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Self::from_str(&content)
    }

    /// Load a configuration file and validate it.
    pub fn load(path: &std::path::Path) -> ValidationResult<Self> {
        let config = Self::from_file(path)?;
        validate_config(&config)?;
        debug!(
            path = %path.display(),
            default_lambtha = config.default_lambtha,
            display_precision = config.display_precision,
            "Model config loaded"
        );
        Ok(config)
    }

    /// Parse configuration from a JSON string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(json: &str) -> ValidationResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| ValidationError::ParseError(format!("Invalid JSON: {}", e)))
    }

    /// Build a model, falling back to `default_lambtha` when `data` is absent.
    pub fn build(&self, data: Option<&Value>) -> ValidationResult<PoissonModel> {
        Ok(PoissonModel::from_parts(data, Some(self.default_lambtha))?)
    }

    /// Render the model label at the configured precision.
    pub fn label(&self, model: &PoissonModel) -> String {
        format!("{:.*}", self.display_precision, model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_minimal_config() {
        let config = ModelConfig::from_str(r#"{"schema_version": "1.0.0"}"#).unwrap();
        assert_eq!(config, ModelConfig::default());
    }

    #[test]
    fn test_parse_full_config() {
        let json = r#"{
            "schema_version": "1.0.0",
            "description": "call-center arrivals per minute",
            "default_lambtha": 2.5,
            "display_precision": 3
        }"#;

        let config = ModelConfig::from_str(json).unwrap();
        assert_eq!(config.default_lambtha, 2.5);
        assert_eq!(config.display_precision, 3);
        assert_eq!(
            config.description.as_deref(),
            Some("call-center arrivals per minute")
        );
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        let err = ModelConfig::from_str("{ not json").unwrap_err();
        assert!(matches!(err, ValidationError::ParseError(_)));
    }

    #[test]
    fn test_build_uses_default_rate_without_data() {
        let config = ModelConfig {
            default_lambtha: 6.0,
            ..ModelConfig::default()
        };
        assert_eq!(config.build(None).unwrap().lambtha(), 6.0);
        assert_eq!(config.build(Some(&Value::Null)).unwrap().lambtha(), 6.0);
    }

    #[test]
    fn test_build_prefers_data() {
        let config = ModelConfig::default();
        let data = json!([3, 4, 5]);
        assert_eq!(config.build(Some(&data)).unwrap().lambtha(), 4.0);
    }

    #[test]
    fn test_build_surfaces_model_errors() {
        let config = ModelConfig::default();
        let err = config.build(Some(&json!("not a list"))).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::Model(poisson_math::PoissonError::TypeKind { .. })
        ));
    }

    #[test]
    fn test_label_precision() {
        let model = PoissonModel::new(2.0).unwrap();
        let config = ModelConfig {
            display_precision: 3,
            ..ModelConfig::default()
        };
        assert_eq!(config.label(&model), "Poisson distribution with λ = 2.000");
        assert_eq!(
            ModelConfig::default().label(&model),
            model.to_string()
        );
    }
}
