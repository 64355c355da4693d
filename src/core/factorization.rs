// src/core/factorization.rs

use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// Prime factor -> exponent. Keys are ascending, exponents always positive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Factorization(BTreeMap<u64, u32>);

impl Factorization {
    pub fn new() -> Self {
        Factorization(BTreeMap::new())
    }

    /// Records one more power of `prime`.
    pub fn add(&mut self, prime: u64) {
        self.add_safe(prime, 1);
    }

    fn add_safe(&mut self, prime: u64, exponent: u32) {
        if exponent == 0 {
            return;
        }
        let entry = self.0.entry(prime).or_insert(0);
        *entry += exponent;
    }

    /// Multiplies the represented number by `other`.
    pub fn combine(&mut self, other: &Factorization) {
        for (&prime, &exponent) in &other.0 {
            self.add_safe(prime, exponent);
        }
    }

    pub fn exponent(&self, prime: u64) -> u32 {
        self.0.get(&prime).copied().unwrap_or(0)
    }

    pub fn primes(&self) -> impl Iterator<Item = u64> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, u64, u32> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Rebuilds the number this factorization describes.
    pub fn product(&self) -> u64 {
        self.0.iter().map(|(&p, &e)| p.pow(e)).product()
    }

}

impl From<BTreeMap<u64, u32>> for Factorization {
    fn from(map: BTreeMap<u64, u32>) -> Self {
        let mut result = Factorization::new();
        for (prime, exponent) in map {
            result.add_safe(prime, exponent);
        }
        result
    }
}

impl<'a> IntoIterator for &'a Factorization {
    type Item = (&'a u64, &'a u32);
    type IntoIter = btree_map::Iter<'a, u64, u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Factorization {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            return write!(f, "1");
        }
        let factors: Vec<String> = self
            .0
            .iter()
            .map(|(p, e)| if *e == 1 { p.to_string() } else { format!("{}^{}", p, e) })
            .collect();
        write!(f, "{}", factors.join(" * "))
    }
}
