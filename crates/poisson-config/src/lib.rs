//! Poisson model configuration loading and validation.
//!
//! This crate provides:
//! - A typed struct for model.json, loaded from an explicit path
//! - Semantic validation

pub mod model;
pub mod validate;

pub use model::ModelConfig;
pub use validate::{validate_config, ValidationError, ValidationResult};

/// Schema version for configuration files.
pub const CONFIG_SCHEMA_VERSION: &str = "1.0.0";

/// Upper bound on decimal places in rendered labels (f64 carries ~17 significant digits).
pub const MAX_DISPLAY_PRECISION: usize = 17;
