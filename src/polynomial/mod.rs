// src/polynomial/mod.rs

pub mod lagrange;
pub mod polynomial;

pub use lagrange::{lagrange, lagrange_integers};
pub use polynomial::Poly;
