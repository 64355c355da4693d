// tests/factorization_tests.rs

use euler::integer_math::factorization_factory::FactorizationFactory;
use euler::integer_math::prime_factory::PrimeFactory;
use euler::integer_math::trial_division::trial_division;
use euler::integer_math::partitions::{partition_count, Partitions};
use euler::integer_math::gcd::GCD;
use num::BigUint;

#[cfg(test)]
mod factorization_tests {
    use super::*;

    #[test]
    fn test_factorization_product_and_primality() {
        let mut primes = PrimeFactory::new();
        for n in 1..2000u64 {
            let factors = trial_division(&mut primes, n).unwrap();
            assert_eq!(factors.product(), n, "Product of factors must give back {}", n);
            for p in factors.primes() {
                assert!(primes.is_prime(p), "{} is a factor of {} but not prime", p, n);
            }
        }
    }

    #[test]
    fn test_divisor_count_matches_exponents() {
        let mut factory = FactorizationFactory::new();
        for n in 1..500u64 {
            let expected: u64 = factory
                .factorize(n)
                .unwrap()
                .iter()
                .map(|(_, e)| *e as u64 + 1)
                .product();
            let divisors = factory.divisors(n).unwrap();
            assert_eq!(divisors.len() as u64, expected, "Divisor count of {}", n);
            assert!(divisors.windows(2).all(|w| w[0] < w[1]), "Divisors of {} must be ascending", n);
            assert!(divisors.iter().all(|d| n % d == 0), "Every divisor must divide {}", n);
        }
    }

    #[test]
    fn test_divisor_functions() {
        let mut factory = FactorizationFactory::new();
        assert_eq!(factory.divisors(12).unwrap(), vec![1, 2, 3, 4, 6, 12]);
        assert_eq!(factory.sum_divisors(28).unwrap(), 56, "28 is perfect");
        assert_eq!(factory.num_divisors(24).unwrap(), 8);
        assert_eq!(factory.divisors(1).unwrap(), vec![1]);
    }

    #[test]
    fn test_all_factorizations_of_twelve() {
        let mut factory = FactorizationFactory::new();
        let mut found: Vec<Vec<u64>> = factory
            .all_factorizations(12, None)
            .unwrap()
            .into_iter()
            .map(|mut f| {
                f.sort();
                f
            })
            .collect();
        found.sort();
        assert_eq!(found, vec![vec![2, 2, 3], vec![2, 6], vec![3, 4], vec![12]]);
        assert_eq!(factory.ordered_factorizations(12).unwrap().len(), 8);
    }

    #[test]
    fn test_memoized_and_plain_factorizations_agree() {
        let mut factory = FactorizationFactory::new();
        for n in [2u64, 16, 24, 36, 60, 64, 96, 120] {
            let plain = factory.unordered_factorizations(n, None).unwrap();
            let memoized = factory.all_factorizations(n, None).unwrap();
            assert_eq!(plain, memoized, "Factorizations of {} must agree", n);
            for f in &memoized {
                assert_eq!(f.iter().product::<u64>(), n, "{:?} must multiply to {}", f, n);
            }
        }
    }

    #[test]
    fn test_partitions() {
        let five: Vec<Vec<u64>> = Partitions::new(5).collect();
        assert_eq!(five.len(), 7, "p(5) = 7");
        assert_eq!(five.first(), Some(&vec![1, 1, 1, 1, 1]));
        assert_eq!(five.last(), Some(&vec![5]));
        for n in 0..=15u64 {
            assert_eq!(
                partition_count(n),
                BigUint::from(Partitions::new(n).count()),
                "Partition count mismatch for {}",
                n
            );
        }
        assert_eq!(partition_count(100), BigUint::from(190_569_292u64), "p(100)");
    }

    #[test]
    fn test_gcd_helpers() {
        assert_eq!(GCD::find_gcd(&[84, 126, 210]), 42);
        assert_eq!(GCD::find_lcm(&[4, 6, 10]), 60);
        assert!(GCD::are_coprime(&[8, 15]));
        assert!(!GCD::are_coprime(&[8, 14]));
    }
}
