// src/continued_fraction/mod.rs

pub mod square_root_cf;

pub use square_root_cf::{Convergent, Convergents, QuotientTriple, SquareRootCf};
