// src/integer_math/combinatorics.rs

use num::{BigUint, One};

pub struct Combinatorics;

impl Combinatorics {
    /// Number of ways to choose `r` things from `n`; zero when `r > n`.
    pub fn n_choose_r(n: u64, r: u64) -> BigUint {
        if r > n {
            return BigUint::from(0u32);
        }
        let r = r.min(n - r);
        // every partial product C(n-r+i, i) is an integer, so the division is exact
        (1..=r).fold(BigUint::one(), |acc, i| acc * BigUint::from(n - r + i) / BigUint::from(i))
    }
}
