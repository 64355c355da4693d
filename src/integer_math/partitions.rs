// src/integer_math/partitions.rs

use std::iter::FusedIterator;
use num::{BigInt, BigUint, Zero};

/// Integer partitions of `n`, each with parts in ascending order, produced in
/// lexicographically increasing order: `[1, 1, ..., 1]` first and `[n]` last.
///
/// Uses the accelerated ascending-composition algorithm: `k` marks the last
/// slot of the current partition, and each step pulls one unit off the last
/// part and spreads the excess over new ascending parts.
pub struct Partitions {
    parts: Vec<u64>,
    k: usize,
    emit_empty: bool,
}

impl Partitions {
    pub fn new(n: u64) -> Self {
        let size = n as usize + 1;
        let mut parts = vec![0u64; size.max(2)];
        parts[1] = n;
        Partitions {
            parts,
            k: if n == 0 { 0 } else { 1 },
            emit_empty: n == 0,
        }
    }
}

impl Iterator for Partitions {
    type Item = Vec<u64>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.emit_empty {
            self.emit_empty = false;
            return Some(Vec::new());
        }
        if self.k == 0 {
            return None;
        }

        let a = &mut self.parts;
        let mut k = self.k;
        let x = a[k - 1] + 1;
        let mut y = a[k] - 1;
        k -= 1;
        while x <= y {
            a[k] = x;
            y -= x;
            k += 1;
        }
        a[k] = x + y;
        self.k = k;
        Some(a[..=k].to_vec())
    }
}

impl FusedIterator for Partitions {}

/// p(n) by Euler's pentagonal number recurrence.
pub fn partition_count(n: u64) -> BigUint {
    let n = n as usize;
    let mut counts: Vec<BigInt> = Vec::with_capacity(n + 1);
    counts.push(BigInt::from(1));
    for m in 1..=n {
        let mut total = BigInt::zero();
        for k in 1.. {
            let first = k * (3 * k - 1) / 2;
            if first > m {
                break;
            }
            let second = k * (3 * k + 1) / 2;
            let mut term = counts[m - first].clone();
            if second <= m {
                term += &counts[m - second];
            }
            if k % 2 == 1 {
                total += term;
            } else {
                total -= term;
            }
        }
        counts.push(total);
    }
    let (_, magnitude) = counts.swap_remove(n).into_parts();
    magnitude
}
