// src/core/mod.rs

pub mod error;
pub mod factorization;

pub use error::{EulerError, Result};
pub use factorization::Factorization;
