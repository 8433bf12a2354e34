//! Elementary numeric kernels used by the Poisson model.
//!
//! These are computed directly in linear space. There is no log-domain
//! rewrite, so `factorial` overflows to `+inf` past `170!` and callers see
//! whatever IEEE-754 arithmetic produces from that.

/// A sample value that can be averaged into a rate.
///
/// Implemented for the integer and float primitives by an `as f64` cast, so
/// `u64`/`i64` counts above 2^53 lose precision the same way any `f64` would.
pub trait AsRate: Copy {
    fn as_rate(self) -> f64;
}

macro_rules! impl_as_rate {
    ($($num_type:ty),*) => {
        $(
            impl AsRate for $num_type {
                fn as_rate(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_as_rate!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);

/// Largest `n` for which `n!` is finite in `f64`.
pub const MAX_FINITE_FACTORIAL: u64 = 170;

/// `n!` as a running product in `f64`.
///
/// Returns `+inf` for `n > 170`.
pub fn factorial(n: u64) -> f64 {
    let mut acc = 1.0;
    for i in 2..=n {
        acc *= i as f64;
        if acc.is_infinite() {
            break;
        }
    }
    acc
}

/// Arithmetic mean of `values`.
///
/// Returns NaN for empty input.
pub fn sample_mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
