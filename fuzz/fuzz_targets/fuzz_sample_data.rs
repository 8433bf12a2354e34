//! Fuzz target for the weakly typed model boundary.
//!
//! Arbitrary JSON is used both as sample data and as a query count. Nothing
//! may panic, and any model that gets built must hold a positive rate.

#![no_main]

use libfuzzer_sys::fuzz_target;
use poisson_math::PoissonModel;
use serde_json::Value;

fuzz_target!(|data: &[u8]| {
    let Ok(value) = serde_json::from_slice::<Value>(data) else {
        return;
    };

    if let Ok(model) = PoissonModel::from_value(&value) {
        assert!(model.lambtha() > 0.0);
    }

    for lambtha in [0.5, 1.0, 2.0] {
        let Ok(model) = PoissonModel::new(lambtha) else {
            return;
        };
        let p = model.pmf_value(&value);
        assert!(p.is_nan() || (0.0..=1.0).contains(&p));
        let c = model.cdf_value(&value);
        assert!(c.is_nan() || c >= 0.0);
    }
});
