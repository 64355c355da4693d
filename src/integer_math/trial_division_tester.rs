// src/integer_math/trial_division_tester.rs

use bitvec::prelude::*;
use log::debug;
use crate::config::EulerConfig;
use crate::core::{EulerError, Result};
use crate::integer_math::prime_sieve::PrimeSieve;

/// Two-tier primality tester with a bounded input range.
///
/// Built with a tuning value T, it keeps every prime below 10^T.
/// 1. n < 10^T is answered by a table lookup.
/// 2. 10^T <= n < 10^(2T) is answered by trial division with the table primes,
///    since any composite in that range has a prime factor below 10^T.
/// 3. n >= 10^(2T) is an `OutOfRange` error.
pub struct TrialDivisionTester {
    small_cutoff: u64,
    big_cutoff: u64,
    table: BitVec,
    primes: Vec<u64>,
}

impl TrialDivisionTester {
    pub fn new(tuning: u32) -> Result<Self> {
        if tuning == 0 {
            return Err(EulerError::invalid_argument("primality tuning must be at least 1"));
        }
        let small_cutoff = 10u64.checked_pow(tuning);
        let big_cutoff = tuning.checked_mul(2).and_then(|t| 10u64.checked_pow(t));
        let (small_cutoff, big_cutoff) = match (small_cutoff, big_cutoff) {
            (Some(small), Some(big)) => (small, big),
            _ => {
                return Err(EulerError::invalid_argument(format!(
                    "primality tuning {} overflows the supported range",
                    tuning
                )))
            }
        };

        let primes: Vec<u64> = PrimeSieve::get_range(2, Some(small_cutoff - 1))?.collect();
        let mut table = bitvec![0; small_cutoff as usize];
        for &p in &primes {
            table.set(p as usize, true);
        }

        debug!(
            "Trial division tester: {} primes below {}, valid below {}",
            primes.len(),
            small_cutoff,
            big_cutoff
        );
        Ok(TrialDivisionTester {
            small_cutoff,
            big_cutoff,
            table,
            primes,
        })
    }

    pub fn from_config(config: &EulerConfig) -> Result<Self> {
        Self::new(config.primality.tuning)
    }

    pub fn small_cutoff(&self) -> u64 {
        self.small_cutoff
    }

    pub fn big_cutoff(&self) -> u64 {
        self.big_cutoff
    }

    pub fn is_prime(&self, n: u64) -> Result<bool> {
        if n < self.small_cutoff {
            return Ok(self.table[n as usize]);
        }
        if n >= self.big_cutoff {
            return Err(EulerError::OutOfRange {
                value: n,
                limit: self.big_cutoff,
            });
        }
        Ok(self.is_prime_by_trial_division(n))
    }

    fn is_prime_by_trial_division(&self, n: u64) -> bool {
        for &p in &self.primes {
            if p * p > n {
                return true;
            }
            if n % p == 0 {
                return false;
            }
        }
        // every prime up to sqrt(n) < 10^T was tried
        true
    }
}
