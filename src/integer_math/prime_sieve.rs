// src/integer_math/prime_sieve.rs

use std::collections::HashMap;
use std::iter::FusedIterator;
use log::{debug, trace};
use crate::core::{EulerError, Result};

const SMALL_PRIMES: [u64; 4] = [2, 3, 5, 7];

/// Incremental Sieve of Eratosthenes.
///
/// A prime is only entered into the deferral map once its square is reached
/// among the candidates, so auxiliary memory grows with the number of primes
/// below the square root of the current candidate. The base primes that supply
/// step sizes come from a second, lazily created `PrimeSieve`, which in turn
/// owns its own supply one level further down.
///
/// The sequence is infinite and cannot be rewound; build a new sieve to start over.
pub struct PrimeSieve {
    small_index: usize,
    // next composite candidate -> step (twice the prime that produced it)
    deferred: HashMap<u64, u64>,
    base_primes: Option<Box<PrimeSieve>>,
    base_prime: u64,
    base_square: u64,
    candidate: u64,
}

impl PrimeSieve {
    pub fn new() -> Self {
        PrimeSieve {
            small_index: 0,
            deferred: HashMap::new(),
            base_primes: None,
            base_prime: 3,
            base_square: 9,
            candidate: 9,
        }
    }

    /// Primes `p` with `minimum <= p`, and `p <= maximum` when a maximum is given.
    ///
    /// A `maximum` that does not exceed `minimum` is rejected.
    pub fn get_range(minimum: u64, maximum: Option<u64>) -> Result<BoundedPrimes> {
        debug!("In prime_sieve get_range with minimum: {}, maximum: {:?}", minimum, maximum);
        if let Some(max) = maximum {
            if max <= minimum {
                return Err(EulerError::invalid_argument(format!(
                    "prime range maximum {} must exceed minimum {}",
                    max, minimum
                )));
            }
        }
        Ok(BoundedPrimes {
            sieve: PrimeSieve::new(),
            minimum,
            maximum,
            finished: false,
        })
    }

    fn schedule(&mut self, mut multiple: u64, step: u64) {
        while self.deferred.contains_key(&multiple) {
            multiple += step;
        }
        self.deferred.insert(multiple, step);
    }

    fn advance_base_prime(&mut self) {
        let supply = self.base_primes.get_or_insert_with(|| {
            // 3 is already the current base prime, skip past it
            let mut inner = PrimeSieve::new();
            inner.small_index = 2;
            Box::new(inner)
        });
        if let Some(p) = supply.next() {
            trace!("Advancing base prime to {}", p);
            self.base_prime = p;
            self.base_square = p * p;
        }
    }

    /// Number of composites currently scheduled in the deferral map.
    pub fn deferred_len(&self) -> usize {
        self.deferred.len()
    }
}

impl Default for PrimeSieve {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for PrimeSieve {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.small_index < SMALL_PRIMES.len() {
            let p = SMALL_PRIMES[self.small_index];
            self.small_index += 1;
            return Some(p);
        }

        loop {
            let c = self.candidate;
            self.candidate += 2;

            match self.deferred.remove(&c) {
                Some(step) => self.schedule(c + step, step),
                None if c < self.base_square => return Some(c),
                None => {
                    // c is the square of the current base prime
                    let step = 2 * self.base_prime;
                    self.schedule(c + step, step);
                    self.advance_base_prime();
                }
            }
        }
    }
}

impl FusedIterator for PrimeSieve {}

/// Finite (or, without a maximum, infinite) window over a fresh `PrimeSieve`.
pub struct BoundedPrimes {
    sieve: PrimeSieve,
    minimum: u64,
    maximum: Option<u64>,
    finished: bool,
}

impl Iterator for BoundedPrimes {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.finished {
            let p = self.sieve.next()?;
            if let Some(max) = self.maximum {
                if p > max {
                    self.finished = true;
                    break;
                }
            }
            if p >= self.minimum {
                return Some(p);
            }
        }
        None
    }
}

impl FusedIterator for BoundedPrimes {}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive_is_prime(n: u64) -> bool {
        n >= 2 && (2..).take_while(|d| d * d <= n).all(|d| n % d != 0)
    }

    #[test]
    fn test_first_primes() {
        let primes: Vec<u64> = PrimeSieve::new().take(15).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47]);
    }

    #[test]
    fn test_matches_naive_primality_below_ten_thousand() {
        let sieved: Vec<u64> = PrimeSieve::new().take_while(|&p| p < 10_000).collect();
        let naive: Vec<u64> = (0..10_000).filter(|&n| naive_is_prime(n)).collect();
        assert_eq!(sieved, naive);
    }

    #[test]
    fn test_ten_thousandth_prime() {
        assert_eq!(PrimeSieve::new().nth(9_999), Some(104_729));
    }

    #[test]
    fn test_deferral_map_stays_small() {
        let mut sieve = PrimeSieve::new();
        let last = sieve.by_ref().take(10_000).last().unwrap();
        assert_eq!(last, 104_729);
        // only primes up to sqrt(104729) ~ 323 may be scheduled; there are 66 of them
        assert!(sieve.deferred_len() <= 66, "deferred map too large: {}", sieve.deferred_len());
    }

    #[test]
    fn test_get_range_bounds_are_inclusive() {
        let primes: Vec<u64> = PrimeSieve::get_range(5, Some(13)).unwrap().collect();
        assert_eq!(primes, vec![5, 7, 11, 13]);

        let primes: Vec<u64> = PrimeSieve::get_range(6, Some(12)).unwrap().collect();
        assert_eq!(primes, vec![7, 11]);
    }

    #[test]
    fn test_get_range_unbounded_above() {
        let primes: Vec<u64> = PrimeSieve::get_range(100, None).unwrap().take(3).collect();
        assert_eq!(primes, vec![101, 103, 107]);
    }

    #[test]
    fn test_get_range_rejects_inverted_bounds() {
        assert!(matches!(PrimeSieve::get_range(20, Some(10)), Err(EulerError::InvalidArgument(_))));
        assert!(PrimeSieve::get_range(10, Some(10)).is_err());
    }

    #[test]
    fn test_get_range_is_fused() {
        let mut range = PrimeSieve::get_range(2, Some(3)).unwrap();
        assert_eq!(range.next(), Some(2));
        assert_eq!(range.next(), Some(3));
        assert_eq!(range.next(), None);
        assert_eq!(range.next(), None);
    }
}
