// src/lib.rs

pub mod config;
pub mod continued_fraction;
pub mod core;
pub mod graph;
pub mod integer_math;
pub mod polynomial;
