// src/continued_fraction/square_root_cf.rs

use std::cell::OnceCell;
use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use log::debug;
use num::{BigInt, BigRational, One, Zero};
use crate::core::{EulerError, Result};
use crate::integer_math::squares::{is_perfect_square, isqrt};

/// Intermediate state (m, d, a) of the square root expansion recurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuotientTriple {
    pub m: u64,
    pub d: u64,
    pub a: u64,
}

impl QuotientTriple {
    /// m' = d*a - m, d' = (N - m'^2) / d, a' = floor((a0 + m') / d')
    fn successor(&self, n: u64, a0: u64) -> QuotientTriple {
        let m = self.d * self.a - self.m;
        let d = (n - m * m) / self.d;
        let a = (a0 + m) / d;
        QuotientTriple { m, d, a }
    }
}

#[derive(Debug, Clone)]
struct Expansion {
    non_periodic: Vec<u64>,
    periodic: Vec<u64>,
}

/// Periodic continued fraction of sqrt(N) for a non-square N.
///
/// The partial quotients are worked out on first use and cached; every later
/// query replays the cached expansion.
#[derive(Debug, Clone)]
pub struct SquareRootCf {
    n: u64,
    a0: u64,
    expansion: OnceCell<Expansion>,
}

impl SquareRootCf {
    pub fn new(n: u64) -> Result<Self> {
        if is_perfect_square(n) {
            return Err(EulerError::invalid_argument(format!(
                "{} is a perfect square, sqrt has no periodic continued fraction",
                n
            )));
        }
        Ok(SquareRootCf {
            n,
            a0: isqrt(n),
            expansion: OnceCell::new(),
        })
    }

    pub fn n(&self) -> u64 {
        self.n
    }

    fn expansion(&self) -> &Expansion {
        self.expansion.get_or_init(|| self.calculate())
    }

    // The triple sequence is walked until a triple repeats exactly; the index
    // of its first occurrence splits the prefix from the periodic block.
    fn calculate(&self) -> Expansion {
        let mut triples: Vec<QuotientTriple> = Vec::new();
        let mut seen: HashMap<QuotientTriple, usize> = HashMap::new();
        let mut t = QuotientTriple { m: 0, d: 1, a: self.a0 };

        let break_point = loop {
            if let Some(&index) = seen.get(&t) {
                break index;
            }
            seen.insert(t, triples.len());
            triples.push(t);
            t = t.successor(self.n, self.a0);
        };

        let quotients: Vec<u64> = triples.iter().map(|t| t.a).collect();
        let (non_periodic, periodic) = quotients.split_at(break_point);
        debug!("sqrt({}) expansion has period {}", self.n, periodic.len());
        Expansion {
            non_periodic: non_periodic.to_vec(),
            periodic: periodic.to_vec(),
        }
    }

    pub fn period(&self) -> usize {
        self.expansion().periodic.len()
    }

    pub fn non_periodic(&self) -> &[u64] {
        &self.expansion().non_periodic
    }

    pub fn periodic(&self) -> &[u64] {
        &self.expansion().periodic
    }

    /// a0, a1, ... : the prefix once, then the periodic block forever.
    pub fn quotients(&self) -> impl Iterator<Item = u64> + '_ {
        let expansion = self.expansion();
        expansion
            .non_periodic
            .iter()
            .chain(expansion.periodic.iter().cycle())
            .copied()
    }

    /// h_n / k_n with h_n = a_n h_(n-1) + h_(n-2), seeded (h_-2, h_-1) = (0, 1)
    /// and (k_-2, k_-1) = (1, 0).
    pub fn convergents(&self) -> Convergents<'_> {
        Convergents {
            quotients: Box::new(self.quotients()),
            h: (BigInt::zero(), BigInt::one()),
            k: (BigInt::one(), BigInt::zero()),
        }
    }
}

impl Display for SquareRootCf {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let expansion = self.expansion();
        let join = |values: &[u64]| values.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(",");
        write!(
            f,
            "[{};{}({})]",
            self.a0,
            join(&expansion.non_periodic[1..]),
            join(&expansion.periodic)
        )
    }
}

/// Numerator and denominator of one convergent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Convergent {
    pub h: BigInt,
    pub k: BigInt,
}

impl Convergent {
    pub fn to_ratio(&self) -> BigRational {
        BigRational::new(self.h.clone(), self.k.clone())
    }
}

impl Display for Convergent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.h, self.k)
    }
}

pub struct Convergents<'a> {
    quotients: Box<dyn Iterator<Item = u64> + 'a>,
    // (x_(n-2), x_(n-1))
    h: (BigInt, BigInt),
    k: (BigInt, BigInt),
}

impl<'a> Iterator for Convergents<'a> {
    type Item = Convergent;

    fn next(&mut self) -> Option<Self::Item> {
        let a = BigInt::from(self.quotients.next()?);
        let h = &a * &self.h.1 + &self.h.0;
        let k = &a * &self.k.1 + &self.k.0;
        self.h.0 = std::mem::replace(&mut self.h.1, h.clone());
        self.k.0 = std::mem::replace(&mut self.k.1, k.clone());
        Some(Convergent { h, k })
    }
}
