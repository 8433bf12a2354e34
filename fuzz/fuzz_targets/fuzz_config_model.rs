//! Fuzz target for model.json configuration parsing.
//!
//! Tests that configuration parsing and validation handle arbitrary input
//! without panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use poisson_config::{validate_config, ModelConfig};

fuzz_target!(|data: &[u8]| {
    if let Ok(config) = serde_json::from_slice::<ModelConfig>(data) {
        if validate_config(&config).is_ok() {
            if let Ok(model) = config.build(None) {
                let _ = config.label(&model);
            }
        }
    }
});
