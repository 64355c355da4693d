// src/integer_math/prime_factory.rs

use std::sync::Mutex;
use lazy_static::lazy_static;
use log::{debug, warn};
use crate::config::EulerConfig;
use crate::core::{Factorization, Result};
use crate::integer_math::prime_sieve::PrimeSieve;
use crate::integer_math::trial_division::trial_division;

const DEFAULT_INCREMENT: usize = 1000;

lazy_static! {
    static ref SHARED_FACTORY: Mutex<PrimeFactory> = Mutex::new(PrimeFactory::new());
}

/// Ordered cache of primes, pulled from a private `PrimeSieve` in fixed-size
/// batches whenever a query reaches past the last cached prime.
///
/// The list only ever grows; it is never reordered or truncated.
pub struct PrimeFactory {
    increment: usize,
    primes: Vec<u64>,
    generator: PrimeSieve,
}

impl PrimeFactory {
    pub fn new() -> Self {
        Self::with_increment(DEFAULT_INCREMENT)
    }

    pub fn with_increment(increment: usize) -> Self {
        let increment = if increment == 0 {
            warn!("Prime cache increment of 0 requested, using 1");
            1
        } else {
            increment
        };
        let mut factory = PrimeFactory {
            increment,
            primes: Vec::with_capacity(increment),
            generator: PrimeSieve::new(),
        };
        factory.extend();
        factory
    }

    pub fn from_config(config: &EulerConfig) -> Self {
        Self::with_increment(config.prime_cache.increment)
    }

    /// Process-wide cache for callers that do not thread their own factory through.
    pub fn shared() -> &'static Mutex<PrimeFactory> {
        &SHARED_FACTORY
    }

    fn extend(&mut self) {
        self.primes.extend(self.generator.by_ref().take(self.increment));
    }

    fn last(&self) -> u64 {
        // never empty: the constructor always pulls at least one batch
        self.primes.last().copied().unwrap_or(2)
    }

    /// Grows the cache until its last prime is at least `value`.
    pub fn ensure_up_to(&mut self, value: u64) {
        if self.last() >= value {
            return;
        }
        let before = self.primes.len();
        while self.last() < value {
            self.extend();
        }
        debug!(
            "Prime cache grown from {} to {} primes (last: {}) to reach {}",
            before,
            self.primes.len(),
            self.last(),
            value
        );
    }

    /// Grows the cache until it holds at least `count` primes.
    pub fn ensure_count(&mut self, count: usize) {
        while self.primes.len() < count {
            self.extend();
        }
    }

    pub fn primes(&self) -> &[u64] {
        &self.primes
    }

    pub fn len(&self) -> usize {
        self.primes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primes.is_empty()
    }

    /// Zero-based: `nth(0) == 2`.
    pub fn nth(&mut self, index: usize) -> u64 {
        self.ensure_count(index + 1);
        self.primes[index]
    }

    pub fn is_prime(&mut self, value: u64) -> bool {
        if value < 2 {
            return false;
        }
        self.ensure_up_to(value);
        self.primes.binary_search(&value).is_ok()
    }

    /// All primes in the closed interval `[minimum, maximum]`.
    pub fn primes_in_range(&mut self, minimum: u64, maximum: u64) -> &[u64] {
        let minimum = minimum.max(2);
        if maximum < minimum {
            return &[];
        }
        self.ensure_up_to(maximum);
        let start = self.primes.partition_point(|&p| p < minimum);
        let end = self.primes.partition_point(|&p| p <= maximum);
        &self.primes[start..end]
    }

    pub fn factorize(&mut self, value: u64) -> Result<Factorization> {
        trial_division(self, value)
    }
}

impl Default for PrimeFactory {
    fn default() -> Self {
        Self::new()
    }
}

fn with_shared<T>(f: impl FnOnce(&mut PrimeFactory) -> T) -> T {
    // a panic while holding the lock cannot leave the cache unsorted, so poisoning is ignored
    let mut guard = match PrimeFactory::shared().lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    f(&mut guard)
}

/// Primality check against the process-wide cache.
pub fn is_prime(value: u64) -> bool {
    with_shared(|factory| factory.is_prime(value))
}

/// Primes in `[minimum, maximum]` from the process-wide cache.
pub fn primes_in_range(minimum: u64, maximum: u64) -> Vec<u64> {
    with_shared(|factory| factory.primes_in_range(minimum, maximum).to_vec())
}

/// Factorization using the process-wide cache.
pub fn factorize(value: u64) -> Result<Factorization> {
    with_shared(|factory| factory.factorize(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_batch() {
        let factory = PrimeFactory::with_increment(10);
        assert_eq!(factory.primes(), &[2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn test_primes_in_range() {
        let mut factory = PrimeFactory::with_increment(3);
        assert_eq!(factory.primes_in_range(2, 15), &[2, 3, 5, 7, 11, 13]);
        assert_eq!(factory.primes_in_range(2, 13), &[2, 3, 5, 7, 11, 13]);
        assert_eq!(factory.primes_in_range(5, 13), &[5, 7, 11, 13]);
        assert_eq!(factory.primes_in_range(6, 13), &[7, 11, 13]);
        assert_eq!(factory.primes_in_range(0, 1), &[] as &[u64]);
        assert_eq!(factory.primes_in_range(14, 16), &[] as &[u64]);
    }

    #[test]
    fn test_is_prime_grows_cache() {
        let mut factory = PrimeFactory::with_increment(4);
        assert_eq!(factory.len(), 4);
        assert!(factory.is_prime(7919));
        assert!(!factory.is_prime(7917));
        assert!(factory.len() >= 1000);
        assert!(!factory.is_prime(0));
        assert!(!factory.is_prime(1));
    }

    #[test]
    fn test_cache_never_shrinks_and_stays_sorted() {
        let mut factory = PrimeFactory::with_increment(7);
        factory.ensure_up_to(5000);
        let len = factory.len();
        factory.ensure_up_to(100);
        assert_eq!(factory.len(), len);
        assert!(factory.primes().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_nth() {
        let mut factory = PrimeFactory::with_increment(2);
        assert_eq!(factory.nth(0), 2);
        assert_eq!(factory.nth(999), 7919);
    }

    #[test]
    fn test_zero_increment_is_clamped() {
        let mut factory = PrimeFactory::with_increment(0);
        assert_eq!(factory.len(), 1);
        assert!(factory.is_prime(97));
    }

    #[test]
    fn test_shared_helpers() {
        assert!(is_prime(104_729));
        assert_eq!(primes_in_range(90, 110), vec![97, 101, 103, 107, 109]);
        assert_eq!(factorize(360).unwrap().product(), 360);
    }

    #[test]
    fn test_from_config() {
        let mut config = EulerConfig::default();
        config.prime_cache.increment = 25;
        let factory = PrimeFactory::from_config(&config);
        assert_eq!(factory.len(), 25);
    }
}
