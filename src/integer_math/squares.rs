// src/integer_math/squares.rs

use num::integer::Roots;

/// floor(sqrt(n)), exact for every u64.
pub fn isqrt(n: u64) -> u64 {
    n.sqrt()
}

pub fn is_perfect_square(n: u64) -> bool {
    let root = n.sqrt();
    root * root == n
}
