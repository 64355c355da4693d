// src/polynomial/lagrange.rs

use std::collections::HashSet;
use num::{BigInt, BigRational};
use crate::core::{EulerError, Result};
use crate::polynomial::polynomial::Poly;

/// Lagrange interpolating polynomial through (x_j, y_j), j = 0..k.
///
/// L(x) = sum of y_j * l_j(x), where l_j is the product over m != j of
/// (x - x_m) / (x_j - x_m). All arithmetic is exact, so the degree of the
/// result can be compared against a known polynomial without rounding noise.
pub fn lagrange(xs: &[BigRational], ys: &[BigRational]) -> Result<Poly> {
    if xs.len() != ys.len() {
        return Err(EulerError::invalid_argument(format!(
            "lagrange needs as many y values as x values ({} != {})",
            xs.len(),
            ys.len()
        )));
    }
    if xs.is_empty() {
        return Err(EulerError::invalid_argument("lagrange needs at least one point"));
    }
    let distinct: HashSet<&BigRational> = xs.iter().collect();
    if distinct.len() != xs.len() {
        return Err(EulerError::invalid_argument("lagrange x values must be distinct"));
    }

    let mut result = Poly::zero();
    for (j, y) in ys.iter().enumerate() {
        result = &result + &basis(xs, j).scale(y);
    }
    Ok(result)
}

pub fn lagrange_integers(xs: &[i64], ys: &[i64]) -> Result<Poly> {
    let to_ratio = |values: &[i64]| -> Vec<BigRational> {
        values.iter().map(|&v| BigRational::from_integer(BigInt::from(v))).collect()
    };
    lagrange(&to_ratio(xs), &to_ratio(ys))
}

fn basis(xs: &[BigRational], j: usize) -> Poly {
    let mut ell = Poly::one();
    for (m, x_m) in xs.iter().enumerate() {
        if m == j {
            continue;
        }
        // (x - x_m) / (x_j - x_m) as A + Bx
        let denominator = &xs[j] - x_m;
        let a = -x_m / &denominator;
        let b = BigRational::from_integer(BigInt::from(1)) / &denominator;
        ell = &ell * &Poly::new(vec![a, b]);
    }
    ell
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_point_is_constant() {
        let p = lagrange_integers(&[1], &[1]).unwrap();
        assert_eq!(p, Poly::from_integers(&[1]));
    }

    #[test]
    fn test_two_cube_terms_give_line() {
        // OP(2, n) = 7n - 6 for the cubes
        let p = lagrange_integers(&[1, 2], &[1, 8]).unwrap();
        assert_eq!(p, Poly::from_integers(&[-6, 7]));
        assert_eq!(p.evaluate_integer(3), BigRational::from_integer(BigInt::from(15)));
    }

    #[test]
    fn test_three_cube_terms_give_quadratic() {
        let p = lagrange_integers(&[1, 2, 3], &[1, 8, 27]).unwrap();
        assert_eq!(p, Poly::from_integers(&[6, -11, 6]));
        assert_eq!(p.evaluate_integer(4), BigRational::from_integer(BigInt::from(58)));
    }

    #[test]
    fn test_recovers_generating_polynomial() {
        let u = Poly::from_integers(&[1, -1, 1, -1, 1, -1, 1, -1, 1, -1, 1]);
        let xs: Vec<i64> = (1..=11).collect();
        let xs_ratio: Vec<BigRational> = xs.iter().map(|&x| BigRational::from_integer(BigInt::from(x))).collect();
        let ys: Vec<BigRational> = xs_ratio.iter().map(|x| u.evaluate(x)).collect();
        assert_eq!(lagrange(&xs_ratio, &ys).unwrap(), u);
    }

    #[test]
    fn test_invalid_input() {
        assert!(lagrange_integers(&[1, 2], &[1]).is_err());
        assert!(lagrange_integers(&[], &[]).is_err());
        assert!(matches!(lagrange_integers(&[1, 1], &[2, 3]), Err(EulerError::InvalidArgument(_))));
    }
}
