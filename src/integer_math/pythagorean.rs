// src/integer_math/pythagorean.rs

use std::fmt::{Display, Formatter};
use std::iter::FusedIterator;
use serde::{Deserialize, Serialize};
use crate::integer_math::gcd::GCD;
use crate::integer_math::squares::isqrt;

/// All coprime pairs (a, b) with b < a <= limit.
///
/// Walks the tree rooted at (1, 1) whose children of (a, b) are (a*k + b, a)
/// for k = 1, 2, ...; every coprime pair appears exactly once. The root
/// itself is not emitted.
pub struct CoprimePairs {
    limit: u64,
    // (a, b, next k to try)
    stack: Vec<(u64, u64, u64)>,
}

impl CoprimePairs {
    pub fn new(limit: u64) -> Self {
        CoprimePairs {
            limit,
            stack: vec![(1, 1, 1)],
        }
    }
}

impl Iterator for CoprimePairs {
    type Item = (u64, u64);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let top = self.stack.last_mut()?;
            let (a, b, k) = *top;
            let child = a * k + b;
            if child <= self.limit {
                top.2 += 1;
                self.stack.push((child, a, 1));
                return Some((child, a));
            }
            self.stack.pop();
        }
    }
}

impl FusedIterator for CoprimePairs {}

/// Sides sorted ascending, plus their sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PythagoreanTriple {
    pub perimeter: u64,
    pub sides: (u64, u64, u64),
}

impl PythagoreanTriple {
    /// Euclid's formula: k(m^2 - n^2), 2kmn, k(m^2 + n^2).
    pub fn from_euclid(m: u64, n: u64, k: u64) -> Self {
        let a = k * (m * m - n * n);
        let b = 2 * k * m * n;
        let c = k * (m * m + n * n);
        let sides = if a < b { (a, b, c) } else { (b, a, c) };
        PythagoreanTriple {
            perimeter: a + b + c,
            sides,
        }
    }

    pub fn is_primitive(&self) -> bool {
        let (a, b, c) = self.sides;
        GCD::are_coprime(&[a, b, c])
    }
}

impl Display for PythagoreanTriple {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let (a, b, c) = self.sides;
        write!(f, "({}, {}, {})", a, b, c)
    }
}

fn euclid_pairs(max_perimeter: u64) -> impl Iterator<Item = (u64, u64)> {
    // 2m(m + n) is the perimeter at k = 1, so m cannot exceed sqrt(L / 2)
    CoprimePairs::new(isqrt(max_perimeter / 2) + 1).filter(|(m, n)| (m - n) % 2 == 1)
}

/// Every Pythagorean triple with a + b + c <= `max_perimeter`.
///
/// Each (m, n, k) combination is emitted separately and nothing is
/// deduplicated; callers that need a set of triples must collect into one.
pub fn pythagorean_triples(max_perimeter: u64) -> impl Iterator<Item = PythagoreanTriple> {
    euclid_pairs(max_perimeter).flat_map(move |(m, n)| {
        (1..)
            .map(move |k| PythagoreanTriple::from_euclid(m, n, k))
            .take_while(move |triple| triple.perimeter <= max_perimeter)
    })
}

/// Primitive triples (k = 1) with a + b + c <= `max_perimeter`.
pub fn primitive_pythagorean_triples(max_perimeter: u64) -> impl Iterator<Item = PythagoreanTriple> {
    euclid_pairs(max_perimeter)
        .map(|(m, n)| PythagoreanTriple::from_euclid(m, n, 1))
        .filter(move |triple| triple.perimeter <= max_perimeter)
}
