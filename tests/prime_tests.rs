// tests/prime_tests.rs

use euler::integer_math::prime_factory::{self, PrimeFactory};
use euler::integer_math::prime_sieve::PrimeSieve;
use euler::integer_math::trial_division_tester::TrialDivisionTester;
use euler::core::EulerError;

#[cfg(test)]
mod prime_tests {
    use super::*;

    #[test]
    fn test_generator_matches_bounded_range() {
        // The first k generated primes equal the bounded range up to the k-th prime
        for k in [1usize, 2, 10, 168, 1000] {
            let generated: Vec<u64> = PrimeSieve::new().take(k).collect();
            let last = *generated.last().unwrap();
            let ranged: Vec<u64> = PrimeSieve::get_range(0, Some(last)).unwrap().collect();
            assert_eq!(generated, ranged, "Generator and range must agree for k = {}", k);
        }
    }

    #[test]
    fn test_range_lower_bound() {
        let primes: Vec<u64> = PrimeSieve::get_range(90, Some(110)).unwrap().collect();
        assert_eq!(primes, vec![97, 101, 103, 107, 109], "Primes between 90 and 110");
    }

    #[test]
    fn test_range_without_maximum_is_unbounded() {
        let primes: Vec<u64> = PrimeSieve::get_range(1_000_000, None).unwrap().take(3).collect();
        assert_eq!(primes, vec![1_000_003, 1_000_033, 1_000_037], "First primes above one million");
    }

    #[test]
    fn test_inconsistent_range_is_rejected() {
        let result = PrimeSieve::get_range(10, Some(5));
        assert!(matches!(result, Err(EulerError::InvalidArgument(_))), "max below min must fail");
    }

    #[test]
    fn test_factory_agrees_with_sieve() {
        let mut factory = PrimeFactory::with_increment(7);
        let expected: Vec<u64> = PrimeSieve::new().take(500).collect();
        factory.ensure_count(500);
        assert_eq!(&factory.primes()[..500], expected.as_slice(), "Cache must follow the generator");
        assert_eq!(factory.nth(499), 3571, "The 500th prime is 3571");
    }

    #[test]
    fn test_factory_range_is_inclusive() {
        let mut factory = PrimeFactory::new();
        assert_eq!(factory.primes_in_range(2, 13), &[2, 3, 5, 7, 11, 13], "Both ends included");
        assert!(factory.primes_in_range(24, 28).is_empty(), "No primes between 24 and 28");
    }

    #[test]
    fn test_shared_cache_functions() {
        assert!(prime_factory::is_prime(7919), "7919 is the 1000th prime");
        assert!(!prime_factory::is_prime(7917), "7917 = 3 * 7 * 13 * 29");
        assert_eq!(prime_factory::primes_in_range(10, 30), vec![11, 13, 17, 19, 23, 29]);
        let factors = prime_factory::factorize(360).unwrap();
        assert_eq!(factors.to_string(), "2^3 * 3^2 * 5", "360 = 2^3 * 3^2 * 5");
    }

    #[test]
    fn test_tester_agrees_with_cache() {
        let tester = TrialDivisionTester::new(3).unwrap();
        let mut factory = PrimeFactory::new();
        for n in (0..1_000_000u64).step_by(997) {
            assert_eq!(
                tester.is_prime(n).unwrap(),
                factory.is_prime(n),
                "Tester and cache disagree on {}",
                n
            );
        }
    }

    #[test]
    fn test_tester_tiers() {
        let tester = TrialDivisionTester::new(2).unwrap();
        assert!(tester.is_prime(97).unwrap(), "97 comes from the table");
        assert!(tester.is_prime(101).unwrap(), "101 comes from trial division");
        assert!(!tester.is_prime(9999).unwrap(), "9999 = 3^2 * 11 * 101");
        assert!(
            matches!(tester.is_prime(10_000), Err(EulerError::OutOfRange { value: 10_000, limit: 10_000 })),
            "10^4 is beyond the tested range"
        );
    }
}
