//! Poisson distribution model.
//!
//! A single rate parameter `λ` (here `lambtha`, the expected number of events
//! in a fixed interval) fully determines the distribution:
//!
//! - PMF: `P(X = k) = λ^k · e^(-λ) / k!`
//! - CDF: `P(X ≤ k) = Σ_{i=0..k} P(X = i)`
//!
//! The model is built either from an explicit rate (parametric mode) or from
//! observed counts, whose arithmetic mean becomes the rate (empirical mode).
//! It is immutable once built.
//!
//! Terms are evaluated in linear space with no log-domain rewrite. For large
//! `k` the factorial overflows to `+inf`; with a large rate `λ^k` may also
//! overflow and the PMF becomes NaN.

use std::fmt;

use serde_json::Value;
use tracing::debug;

use super::kernels::{factorial, sample_mean, AsRate, MAX_FINITE_FACTORIAL};
use crate::coerce::{coerce_count, coerce_samples};
use crate::error::{PoissonError, Result};

/// Rate used when none is supplied.
pub const DEFAULT_LAMBTHA: f64 = 1.0;

/// Minimum number of observations accepted in empirical mode.
pub const MIN_SAMPLES: usize = 2;

/// Decimal places used by `Display` unless the formatter asks for others.
pub const DEFAULT_DISPLAY_PRECISION: usize = 2;

/// A Poisson distribution with a validated, strictly positive rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoissonModel {
    lambtha: f64,
}

impl PoissonModel {
    /// Create a model from an explicit rate.
    ///
    /// Fails with [`PoissonError::InvalidParameter`] if `lambtha` is not a
    /// finite value greater than zero.
    ///
    /// # Example
    /// ```
    /// use poisson_math::PoissonModel;
    ///
    /// let model = PoissonModel::new(2.0).unwrap();
    /// assert!((model.pmf(0) - 0.1353).abs() < 1e-4);
    /// assert!((model.cdf(3) - 0.8571).abs() < 1e-4);
    /// ```
    pub fn new(lambtha: f64) -> Result<Self> {
        let model = Self::checked(lambtha)?;
        debug!(lambtha, mode = "parametric", "Poisson model constructed");
        Ok(model)
    }

    /// Estimate the rate from observed counts.
    ///
    /// The rate is the arithmetic mean of `data`. Fails with
    /// [`PoissonError::InsufficientData`] for fewer than [`MIN_SAMPLES`]
    /// observations, and with [`PoissonError::InvalidParameter`] if the mean
    /// is not strictly positive (e.g. every observation is zero).
    ///
    /// # Example
    /// ```
    /// use poisson_math::PoissonModel;
    ///
    /// let model = PoissonModel::from_samples(&[3i64, 4, 5]).unwrap();
    /// assert_eq!(model.lambtha(), 4.0);
    /// ```
    pub fn from_samples<T: AsRate>(data: &[T]) -> Result<Self> {
        if data.len() < MIN_SAMPLES {
            debug!(
                samples = data.len(),
                required = MIN_SAMPLES,
                "Rejected sample data: too few observations"
            );
            return Err(PoissonError::InsufficientData { count: data.len() });
        }

        let values: Vec<f64> = data.iter().map(|&v| v.as_rate()).collect();
        let model = Self::checked(sample_mean(&values))?;
        debug!(
            lambtha = model.lambtha,
            samples = values.len(),
            mode = "empirical",
            "Poisson model constructed"
        );
        Ok(model)
    }

    /// Estimate the rate from loosely typed sample data.
    ///
    /// `data` must be a JSON array of numbers; anything else fails with
    /// [`PoissonError::TypeKind`]. The remaining checks are those of
    /// [`PoissonModel::from_samples`].
    pub fn from_value(data: &Value) -> Result<Self> {
        let samples = coerce_samples(data).inspect_err(|err| {
            debug!(error = %err, "Rejected sample data: not a list of numbers");
        })?;
        Self::from_samples(&samples)
    }

    /// Build a model from optional sample data and an optional rate.
    ///
    /// Non-null `data` takes precedence and selects empirical mode; the rate
    /// is then ignored. Otherwise the model is parametric with `lambtha`, or
    /// [`DEFAULT_LAMBTHA`] when no rate is given.
    pub fn from_parts(data: Option<&Value>, lambtha: Option<f64>) -> Result<Self> {
        match data {
            Some(value) if !value.is_null() => Self::from_value(value),
            _ => Self::new(lambtha.unwrap_or(DEFAULT_LAMBTHA)),
        }
    }

    /// The expected number of occurrences per interval.
    pub fn lambtha(&self) -> f64 {
        self.lambtha
    }

    /// Probability of exactly `k` events.
    ///
    /// Returns `0.0` for negative `k`.
    pub fn pmf(&self, k: i64) -> f64 {
        if k < 0 {
            return 0.0;
        }
        self.lambtha.powf(k as f64) * (-self.lambtha).exp() / factorial(k as u64)
    }

    /// Probability of at most `k` events.
    ///
    /// Returns `0.0` for negative `k`. Terms are accumulated in order from
    /// `0`, so `cdf(k)` is exactly `cdf(k - 1) + pmf(k)`.
    ///
    /// Past `170` the factorial is `+inf`, so each further term is exactly
    /// `0.0` while `λ^i` is finite and NaN once it overflows. `λ^i` is
    /// monotone in `i`, so the whole tail adds the same as its last term
    /// `pmf(k)` and the loop stops at the factorial limit.
    pub fn cdf(&self, k: i64) -> f64 {
        if k < 0 {
            return 0.0;
        }
        let finite_terms = k.min(MAX_FINITE_FACTORIAL as i64);
        let mut total = 0.0;
        for i in 0..=finite_terms {
            total += self.pmf(i);
            if total.is_nan() {
                return total;
            }
        }
        if k > finite_terms {
            total += self.pmf(k);
        }
        total
    }

    /// [`PoissonModel::pmf`] for a loosely typed `k`.
    ///
    /// Returns `0.0` when `k` cannot be coerced to an integer (see
    /// [`coerce_count`]).
    pub fn pmf_value(&self, k: &Value) -> f64 {
        coerce_count(k).map_or(0.0, |k| self.pmf(k))
    }

    /// [`PoissonModel::cdf`] for a loosely typed `k`.
    pub fn cdf_value(&self, k: &Value) -> f64 {
        coerce_count(k).map_or(0.0, |k| self.cdf(k))
    }

    fn checked(lambtha: f64) -> Result<Self> {
        if !lambtha.is_finite() || lambtha <= 0.0 {
            debug!(lambtha, "Rejected rate: not a finite positive value");
            return Err(PoissonError::InvalidParameter { value: lambtha });
        }
        Ok(Self { lambtha })
    }
}

impl Default for PoissonModel {
    fn default() -> Self {
        Self {
            lambtha: DEFAULT_LAMBTHA,
        }
    }
}

impl fmt::Display for PoissonModel {
    /// `Poisson distribution with λ = 2.00`; `{:.4}` selects 4 decimals.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DEFAULT_DISPLAY_PRECISION);
        write!(
            f,
            "Poisson distribution with λ = {:.*}",
            precision, self.lambtha
        )
    }
}
