// src/integer_math/trial_division.rs
//
// Trial Division against the cached prime list
// Complexity: O(pi(sqrt(n)))
// Best for: the small-to-medium inputs the solvers feed it (n < 10^14 or so)

use log::trace;
use crate::core::{EulerError, Factorization, Result};
use crate::integer_math::prime_factory::PrimeFactory;
use crate::integer_math::squares::isqrt;

/// Returns the prime factorization of `n` as prime -> exponent.
///
/// Every cached prime `p` with `p * p <= n` is divided out as often as it goes;
/// whatever is left above 1 is itself prime and recorded with exponent 1.
/// The remainder shrinks with every division, so the loop always terminates.
///
/// # Arguments
/// * `primes` - The growable prime cache; extended to sqrt(n) if needed
/// * `n` - The number to factor (must be >= 1)
///
/// # Examples
/// ```
/// use euler::integer_math::prime_factory::PrimeFactory;
/// use euler::integer_math::trial_division::trial_division;
///
/// let mut primes = PrimeFactory::new();
/// let f = trial_division(&mut primes, 10054323).unwrap();
/// assert_eq!(f.exponent(3), 2);
/// assert_eq!(f.exponent(31), 1);
/// assert_eq!(f.exponent(36037), 1);
/// ```
pub fn trial_division(primes: &mut PrimeFactory, n: u64) -> Result<Factorization> {
    if n == 0 {
        return Err(EulerError::invalid_argument("cannot factor 0"));
    }

    let mut factors = Factorization::new();
    let mut remaining = n;

    primes.ensure_up_to(isqrt(n) + 1);
    for &p in primes.primes() {
        if p * p > remaining {
            break;
        }
        while remaining % p == 0 {
            factors.add(p);
            remaining /= p;
        }
    }

    if remaining > 1 {
        factors.add(remaining);
    }

    trace!("{} = {}", n, factors);
    Ok(factors)
}
