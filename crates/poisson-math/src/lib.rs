//! Poisson distribution model.
//!
//! Estimate the event rate from observed counts (or take it as given), then
//! query the probability mass and cumulative distribution functions.
//!
//! ```
//! use poisson_math::PoissonModel;
//!
//! let model = PoissonModel::from_samples(&[3u32, 4, 5]).unwrap();
//! assert_eq!(model.lambtha(), 4.0);
//! assert_eq!(model.to_string(), "Poisson distribution with λ = 4.00");
//! ```

pub mod coerce;
pub mod error;
pub mod math;

pub use error::{ErrorCategory, PoissonError, Result};
pub use math::kernels::*;
pub use math::poisson::{
    PoissonModel, DEFAULT_DISPLAY_PRECISION, DEFAULT_LAMBTHA, MIN_SAMPLES,
};
