//! Dense polynomials with exact non-negative integer coefficients.
//!
//! Index `i` of the coefficient vector holds the coefficient of `x^i`.

use core::ops::Mul;

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Discrete convolution of two coefficient sequences.
///
/// The result has `a.len() + b.len() - 1` terms (or none if either side is
/// empty). Only indices inside each operand contribute.
pub fn polynomial_product(a: &[BigUint], b: &[BigUint]) -> Vec<BigUint> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut product = vec![BigUint::zero(); a.len() + b.len() - 1];
    for (i, ai) in a.iter().enumerate() {
        if ai.is_zero() {
            continue;
        }
        for (j, bj) in b.iter().enumerate() {
            product[i + j] += ai * bj;
        }
    }
    product
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Polynomial {
    coefficients: Vec<BigUint>,
}

impl Polynomial {
    pub fn new(coefficients: Vec<BigUint>) -> Self {
        Polynomial { coefficients }
    }

    /// The constant polynomial `1`.
    pub fn one() -> Self {
        Polynomial::new(vec![BigUint::one()])
    }

    pub fn coefficients(&self) -> &[BigUint] {
        &self.coefficients
    }

    /// Number of stored terms (degree + 1 for a dense polynomial).
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Coefficient of `x^i`; zero past the stored terms.
    pub fn coefficient(&self, i: usize) -> BigUint {
        self.coefficients.get(i).cloned().unwrap_or_default()
    }

    pub fn product(&self, other: &Polynomial) -> Polynomial {
        Polynomial::new(polynomial_product(&self.coefficients, &other.coefficients))
    }

    /// `self^n` by repeated squaring: `O(log n)` products instead of `O(n)`.
    ///
    /// `pow(0)` is the constant `1`, `pow(1)` is `self`.
    pub fn pow(&self, n: u32) -> Polynomial {
        match n {
            0 => Polynomial::one(),
            1 => self.clone(),
            _ => {
                let half = self.pow(n / 2);
                let squared = half.product(&half);
                if n % 2 == 1 {
                    squared.product(self)
                } else {
                    squared
                }
            }
        }
    }
}

impl Mul for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Self) -> Polynomial {
        self.product(rhs)
    }
}

impl From<Vec<u64>> for Polynomial {
    fn from(coefficients: Vec<u64>) -> Self {
        Polynomial::new(coefficients.into_iter().map(BigUint::from).collect())
    }
}
