// src/integer_math/pell.rs

use std::iter::FusedIterator;
use log::debug;
use num::{BigInt, One};
use crate::continued_fraction::SquareRootCf;
use crate::core::{EulerError, Result};

/// Successive solutions (x, y) of x^2 - D y^2 = 1, smallest first.
///
/// The fundamental solution is the first convergent h/k of sqrt(D) with
/// h^2 - D k^2 = 1. It always sits within the first two periods of the
/// expansion, so the scan is bounded. Later solutions follow from
/// x' = x1 x + D y1 y, y' = x1 y + y1 x.
#[derive(Debug, Clone)]
pub struct PellSolutions {
    d: BigInt,
    x1: BigInt,
    y1: BigInt,
    current: Option<(BigInt, BigInt)>,
}

impl PellSolutions {
    /// Fails for a perfect square `d` (including 0), which admits no non-trivial solution.
    pub fn new(d: u64) -> Result<Self> {
        let cf = SquareRootCf::new(d)?;
        let bound = 2 * cf.period();
        let big_d = BigInt::from(d);

        let fundamental = cf
            .convergents()
            .take(bound)
            .find(|c| &c.h * &c.h - &big_d * &c.k * &c.k == BigInt::one())
            .ok_or_else(|| {
                EulerError::invalid_argument(format!("no fundamental solution found for D = {}", d))
            })?;

        debug!("Fundamental solution for D = {}: ({}, {})", d, fundamental.h, fundamental.k);
        Ok(PellSolutions {
            d: big_d,
            x1: fundamental.h,
            y1: fundamental.k,
            current: None,
        })
    }

    pub fn fundamental(&self) -> (BigInt, BigInt) {
        (self.x1.clone(), self.y1.clone())
    }
}

impl Iterator for PellSolutions {
    type Item = (BigInt, BigInt);

    fn next(&mut self) -> Option<Self::Item> {
        let next = match &self.current {
            None => (self.x1.clone(), self.y1.clone()),
            Some((x, y)) => (
                &self.x1 * x + &self.d * &self.y1 * y,
                &self.x1 * y + &self.y1 * x,
            ),
        };
        self.current = Some(next.clone());
        Some(next)
    }
}

impl FusedIterator for PellSolutions {}
