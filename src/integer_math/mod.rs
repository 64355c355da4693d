// src/integer_math/mod.rs

pub mod combinatorics;
pub mod factorization_factory;
pub mod gcd;
pub mod partitions;
pub mod pell;
pub mod prime_factory;
pub mod prime_sieve;
pub mod pythagorean;
pub mod squares;
pub mod trial_division;
pub mod trial_division_tester;
