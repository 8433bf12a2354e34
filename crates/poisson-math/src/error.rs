//! Error types for Poisson model construction.
//!
//! Construction is the only fallible operation: queries (`pmf`, `cdf`) never
//! fail and degrade to a zero probability instead.
//!
//! Every error carries:
//! - A stable numeric code for machine parsing
//! - A category for grouping
//! - A short headline and a remediation hint for humans
//!
//! ```text
//! ✗ Insufficient Sample Data
//!   Reason: data must contain multiple values (got 1)
//!   Fix: Supply at least two observed counts, or construct from an explicit rate.
//! ```

use thiserror::Error;

/// Result type alias for model construction.
pub type Result<T> = std::result::Result<T, PoissonError>;

/// Error categories for grouping related errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Problems with the sample data handed to empirical mode.
    Input,
    /// Problems with the rate parameter itself.
    Parameter,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Input => write!(f, "input"),
            ErrorCategory::Parameter => write!(f, "parameter"),
        }
    }
}

/// Reasons a [`PoissonModel`](crate::PoissonModel) cannot be constructed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PoissonError {
    /// Sample data was not a list of numbers.
    #[error("data must be a list of numbers, got {found}")]
    TypeKind { found: String },

    /// Fewer samples than needed for a mean-based estimate.
    #[error("data must contain multiple values (got {count})")]
    InsufficientData { count: usize },

    /// The rate is not a finite positive number.
    #[error("lambtha must be a positive value (got {value})")]
    InvalidParameter { value: f64 },
}

impl PoissonError {
    /// Returns the stable error code.
    ///
    /// - 10: sample data has the wrong shape or element type
    /// - 11: too few samples
    /// - 12: invalid rate
    pub fn code(&self) -> u32 {
        match self {
            PoissonError::TypeKind { .. } => 10,
            PoissonError::InsufficientData { .. } => 11,
            PoissonError::InvalidParameter { .. } => 12,
        }
    }

    /// Returns the error category for grouping and filtering.
    pub fn category(&self) -> ErrorCategory {
        match self {
            PoissonError::TypeKind { .. } | PoissonError::InsufficientData { .. } => {
                ErrorCategory::Input
            }
            PoissonError::InvalidParameter { .. } => ErrorCategory::Parameter,
        }
    }

    /// Returns a short headline for human-readable output.
    pub fn headline(&self) -> &'static str {
        match self {
            PoissonError::TypeKind { .. } => "Invalid Sample Data",
            PoissonError::InsufficientData { .. } => "Insufficient Sample Data",
            PoissonError::InvalidParameter { .. } => "Invalid Rate Parameter",
        }
    }

    /// Returns a human-readable remediation hint.
    pub fn remediation(&self) -> &'static str {
        match self {
            PoissonError::TypeKind { .. } => {
                "Pass the observed counts as a list of numbers, e.g. [3, 4, 5]."
            }
            PoissonError::InsufficientData { .. } => {
                "Supply at least two observed counts, or construct from an explicit rate."
            }
            PoissonError::InvalidParameter { .. } => {
                "Use a finite rate greater than zero. Sample data must average above zero."
            }
        }
    }

    /// Formats the error as a multi-line block for terminal output.
    pub fn format_human(&self) -> String {
        format!(
            "✗ {}\n  Reason: {}\n  Fix: {}",
            self.headline(),
            self,
            self.remediation()
        )
    }
}
