// src/integer_math/gcd.rs

use num::Integer;

pub struct GCD;

impl GCD {
    pub fn find_lcm(numbers: &[u64]) -> u64 {
        numbers.iter().fold(1, |acc, x| Self::find_lcm_pair(acc, *x))
    }

    pub fn find_lcm_pair(left: u64, right: u64) -> u64 {
        left.lcm(&right)
    }

    pub fn find_gcd(numbers: &[u64]) -> u64 {
        numbers.iter().fold(0, |acc, x| Self::find_gcd_pair(acc, *x))
    }

    pub fn find_gcd_pair(left: u64, right: u64) -> u64 {
        left.gcd(&right)
    }

    /// True when the gcd of the whole set is 1; pairs within it may still share factors.
    pub fn are_coprime(numbers: &[u64]) -> bool {
        Self::find_gcd(numbers) == 1
    }
}
