//! Core math modules.

pub mod kernels;
pub mod poisson;
