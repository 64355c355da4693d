// src/integer_math/factorization_factory.rs

use std::collections::HashMap;
use log::{debug, trace};
use crate::core::{EulerError, Factorization, Result};
use crate::integer_math::prime_factory::PrimeFactory;

/// Divisor and multiplicative-partition queries on top of a `PrimeFactory`.
///
/// Divisor lists and the bounded factorization lists are memoized for the
/// lifetime of the factory. Neither cache evicts, which suits batch runs; a
/// long-lived process should drop the factory once it is done with it.
pub struct FactorizationFactory {
    primes: PrimeFactory,
    divisor_cache: HashMap<u64, Vec<u64>>,
    factorization_cache: HashMap<(u64, u64), Vec<Vec<u64>>>,
}

impl FactorizationFactory {
    pub fn new() -> Self {
        Self::with_prime_factory(PrimeFactory::new())
    }

    pub fn with_prime_factory(primes: PrimeFactory) -> Self {
        FactorizationFactory {
            primes,
            divisor_cache: HashMap::new(),
            factorization_cache: HashMap::new(),
        }
    }

    pub fn prime_factory(&mut self) -> &mut PrimeFactory {
        &mut self.primes
    }

    pub fn factorize(&mut self, n: u64) -> Result<Factorization> {
        self.primes.factorize(n)
    }

    /// Divisors of `n` in ascending order, 1 and `n` included.
    ///
    /// Built from the factorization by multiplying the divisors found so far
    /// by each successive prime power.
    pub fn divisors(&mut self, n: u64) -> Result<Vec<u64>> {
        if let Some(cached) = self.divisor_cache.get(&n) {
            return Ok(cached.clone());
        }

        let factorization = self.factorize(n)?;
        let mut divisors = vec![1u64];
        for (&prime, &exponent) in &factorization {
            let base = divisors.clone();
            let mut power = 1u64;
            for _ in 0..exponent {
                power *= prime;
                divisors.extend(base.iter().map(|d| d * power));
            }
        }
        divisors.sort_unstable();

        trace!("divisors({}) = {:?}", n, divisors);
        self.divisor_cache.insert(n, divisors.clone());
        Ok(divisors)
    }

    /// DivisorSigma[0, n]: product of (e + 1) over the exponents.
    pub fn num_divisors(&mut self, n: u64) -> Result<u64> {
        let factorization = self.factorize(n)?;
        Ok(factorization.iter().map(|(_, &e)| e as u64 + 1).product())
    }

    /// DivisorSigma[1, n]: product of (p^(e+1) - 1) / (p - 1) over the factorization.
    pub fn sum_divisors(&mut self, n: u64) -> Result<u64> {
        let factorization = self.factorize(n)?;
        Ok(factorization
            .iter()
            .map(|(&p, &e)| (0..=e).map(|i| p.pow(i)).sum::<u64>())
            .product())
    }

    /// Every way of writing `n` as an ordered product of factors greater than 1.
    ///
    /// `ordered_factorizations(12)` gives `[2,2,3]`, `[2,3,2]`, `[2,6]`,
    /// `[3,2,2]`, `[3,4]`, `[4,3]`, `[6,2]`, `[12]`.
    pub fn ordered_factorizations(&mut self, n: u64) -> Result<Vec<Vec<u64>>> {
        if n == 0 {
            return Err(EulerError::invalid_argument("cannot factor 0"));
        }
        if n == 1 {
            return Ok(vec![vec![]]);
        }

        let mut result = Vec::new();
        for d in self.divisors(n)?.into_iter().skip(1) {
            for sub in self.ordered_factorizations(n / d)? {
                result.push(prepend(d, sub));
            }
        }
        Ok(result)
    }

    /// Unordered factorizations of `n` whose largest part is at most
    /// `max_part` (defaults to `n`), each listed with non-increasing parts.
    ///
    /// Recomputes every sub-problem; prefer [`Self::all_factorizations`] for
    /// repeated queries.
    pub fn unordered_factorizations(&mut self, n: u64, max_part: Option<u64>) -> Result<Vec<Vec<u64>>> {
        if n == 0 {
            return Err(EulerError::invalid_argument("cannot factor 0"));
        }
        let max_part = max_part.unwrap_or(n);
        if n == 1 {
            return Ok(vec![vec![]]);
        }

        let mut result = Vec::new();
        for d in self.divisors(n)?.into_iter().skip(1) {
            if d > max_part {
                break;
            }
            for sub in self.unordered_factorizations(n / d, Some(d))? {
                result.push(prepend(d, sub));
            }
        }
        Ok(result)
    }

    /// Memoized variant of [`Self::unordered_factorizations`], keyed on `(n, max_part)`.
    ///
    /// `all_factorizations(12, None)` gives `[3,2,2]`, `[4,3]`, `[6,2]`, `[12]`.
    pub fn all_factorizations(&mut self, n: u64, max_part: Option<u64>) -> Result<Vec<Vec<u64>>> {
        if n == 0 {
            return Err(EulerError::invalid_argument("cannot factor 0"));
        }
        let max_part = max_part.unwrap_or(n);
        if n == 1 {
            return Ok(vec![vec![]]);
        }
        if let Some(cached) = self.factorization_cache.get(&(n, max_part)) {
            return Ok(cached.clone());
        }

        let mut result = Vec::new();
        for d in self.divisors(n)?.into_iter().skip(1) {
            if d > max_part {
                break;
            }
            for sub in self.all_factorizations(n / d, Some(d))? {
                result.push(prepend(d, sub));
            }
        }

        self.factorization_cache.insert((n, max_part), result.clone());
        if self.factorization_cache.len() % 10_000 == 0 {
            debug!("Factorization cache holds {} entries", self.factorization_cache.len());
        }
        Ok(result)
    }
}

impl Default for FactorizationFactory {
    fn default() -> Self {
        Self::new()
    }
}

fn prepend(head: u64, tail: Vec<u64>) -> Vec<u64> {
    let mut factorization = Vec::with_capacity(tail.len() + 1);
    factorization.push(head);
    factorization.extend(tail);
    factorization
}
