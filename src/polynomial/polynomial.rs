// src/polynomial/polynomial.rs

use std::fmt::{Display, Formatter, Result};
use std::ops::{Add, Index, Mul, Neg, Sub};
use num::{BigInt, BigRational, One, Signed, Zero};

/// Single-variable polynomial with exact rational coefficients.
///
/// `coefficients[i]` multiplies `x^i`. Trailing zero coefficients are always
/// trimmed, and the zero polynomial is stored as `[0]`, so two equal
/// polynomials always have identical coefficient vectors.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Poly {
    coefficients: Vec<BigRational>,
}

impl Poly {
    pub fn new(coefficients: Vec<BigRational>) -> Self {
        let mut polynomial = Poly { coefficients };
        polynomial.remove_zeros();
        polynomial
    }

    pub fn from_integers(coefficients: &[i64]) -> Self {
        Poly::new(coefficients.iter().map(|&c| BigRational::from_integer(BigInt::from(c))).collect())
    }

    pub fn constant(value: BigRational) -> Self {
        Poly::new(vec![value])
    }

    pub fn zero() -> Self {
        Poly::new(vec![BigRational::zero()])
    }

    pub fn one() -> Self {
        Poly::new(vec![BigRational::one()])
    }

    /// The identity polynomial p(x) = x.
    pub fn x() -> Self {
        Poly::new(vec![BigRational::zero(), BigRational::one()])
    }

    fn remove_zeros(&mut self) {
        while self.coefficients.last().map_or(false, |c| c.is_zero()) {
            self.coefficients.pop();
        }
        if self.coefficients.is_empty() {
            self.coefficients.push(BigRational::zero());
        }
    }

    pub fn coefficients(&self) -> &[BigRational] {
        &self.coefficients
    }

    /// Index of the highest nonzero coefficient; 0 for the zero polynomial.
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    pub fn is_zero(&self) -> bool {
        self.coefficients.len() == 1 && self.coefficients[0].is_zero()
    }

    pub fn evaluate(&self, x: &BigRational) -> BigRational {
        let mut result = BigRational::zero();
        for coefficient in self.coefficients.iter().rev() {
            result = result * x + coefficient;
        }
        result
    }

    pub fn evaluate_integer(&self, x: i64) -> BigRational {
        self.evaluate(&BigRational::from_integer(BigInt::from(x)))
    }

    pub fn scale(&self, factor: &BigRational) -> Self {
        Poly::new(self.coefficients.iter().map(|c| c * factor).collect())
    }

    /// Cauchy product: the coefficient of x^k is the sum of a_i * b_(k-i).
    pub fn multiply(left: &Poly, right: &Poly) -> Self {
        let (da, db) = (left.degree(), right.degree());
        let mut coefficients = vec![BigRational::zero(); da + db + 1];
        for (i, a) in left.coefficients.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, b) in right.coefficients.iter().enumerate() {
                coefficients[i + j] += a * b;
            }
        }
        Poly::new(coefficients)
    }

    fn zip_with(left: &Poly, right: &Poly, op: impl Fn(&BigRational, &BigRational) -> BigRational) -> Self {
        let len = left.coefficients.len().max(right.coefficients.len());
        let zero = BigRational::zero();
        let coefficients = (0..len)
            .map(|i| {
                let a = left.coefficients.get(i).unwrap_or(&zero);
                let b = right.coefficients.get(i).unwrap_or(&zero);
                op(a, b)
            })
            .collect();
        Poly::new(coefficients)
    }
}

impl Default for Poly {
    fn default() -> Self {
        Poly::zero()
    }
}

impl Index<usize> for Poly {
    type Output = BigRational;

    /// Panics past the degree, like slice indexing.
    fn index(&self, index: usize) -> &BigRational {
        &self.coefficients[index]
    }
}

impl Add<&Poly> for &Poly {
    type Output = Poly;

    fn add(self, other: &Poly) -> Poly {
        Poly::zip_with(self, other, |a, b| a + b)
    }
}

impl Add for Poly {
    type Output = Poly;

    fn add(self, other: Poly) -> Poly {
        &self + &other
    }
}

impl Sub<&Poly> for &Poly {
    type Output = Poly;

    fn sub(self, other: &Poly) -> Poly {
        Poly::zip_with(self, other, |a, b| a - b)
    }
}

impl Sub for Poly {
    type Output = Poly;

    fn sub(self, other: Poly) -> Poly {
        &self - &other
    }
}

impl Mul<&Poly> for &Poly {
    type Output = Poly;

    fn mul(self, other: &Poly) -> Poly {
        Poly::multiply(self, other)
    }
}

impl Mul for Poly {
    type Output = Poly;

    fn mul(self, other: Poly) -> Poly {
        Poly::multiply(&self, &other)
    }
}

impl Mul<&BigRational> for &Poly {
    type Output = Poly;

    fn mul(self, factor: &BigRational) -> Poly {
        self.scale(factor)
    }
}

impl Neg for Poly {
    type Output = Poly;

    fn neg(self) -> Poly {
        self.scale(&-BigRational::one())
    }
}

impl Display for Poly {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut output = String::new();
        let mut first = true;
        for (exponent, coefficient) in self.coefficients.iter().enumerate().rev() {
            if coefficient.is_zero() {
                continue;
            }
            let sign = match (first, coefficient.is_negative()) {
                (true, true) => "-",
                (true, false) => "",
                (false, true) => " - ",
                (false, false) => " + ",
            };
            let magnitude = coefficient.abs();
            let coefficient_term = if magnitude.is_one() && exponent != 0 {
                String::new()
            } else {
                magnitude.to_string()
            };
            let x_term = match exponent {
                0 => String::new(),
                1 => "x".to_string(),
                e => format!("x^{}", e),
            };
            output.push_str(sign);
            output.push_str(&coefficient_term);
            output.push_str(&x_term);
            first = false;
        }
        write!(f, "{}", output)
    }
}
