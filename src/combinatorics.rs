//! Exact counting primitives: factorials and the fixed-point counts that
//! seed the rook polynomial.
//!
//! Everything here works on `BigUint`; 21! already overflows `u64`, and a
//! standard deck needs 52!.

use std::collections::HashMap;

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// `n!`, with `0! = 1`.
pub fn factorial(n: u64) -> BigUint {
    (2..=n).fold(BigUint::one(), |acc, k| acc * k)
}

/// The table `[0!, 1!, ..., n!]`.
pub fn factorials_up_to(n: u64) -> Vec<BigUint> {
    let mut table = Vec::with_capacity(n as usize + 1);
    let mut current = BigUint::one();
    table.push(current.clone());
    for k in 1..=n {
        current *= k;
        table.push(current.clone());
    }
    table
}

/// Memoised evaluation of `N(i, x, y)`.
///
/// `N(i, x, y)` counts the placements whose rank-fixed-point set includes a
/// given `i`-subset, with `x` rank-columns and `y` suit-rows still free:
/// ```text
/// N(0, x, y) = 1
/// N(1, x, y) = x * y
/// N(i, x, y) = sum_{r=1}^{x-i+1} y * N(i-1, x-r, y-1)     (i >= 2)
/// ```
/// An empty summation range gives 0. Recursion depth is at most `i`.
#[derive(Debug, Default)]
pub struct FixedPointCounter {
    memo: HashMap<(u32, u32, u32), BigUint>,
}

impl FixedPointCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&mut self, i: u32, x: u32, y: u32) -> BigUint {
        match i {
            0 => return BigUint::one(),
            1 => return BigUint::from(x) * y,
            _ => {}
        }
        // y * N(..) vanishes for y = 0; x < i leaves the range empty.
        if y == 0 || x < i {
            return BigUint::zero();
        }
        if let Some(hit) = self.memo.get(&(i, x, y)) {
            return hit.clone();
        }

        let mut total = BigUint::zero();
        for r in 1..=(x - i + 1) {
            total += self.count(i - 1, x - r, y - 1);
        }
        total *= y;

        self.memo.insert((i, x, y), total.clone());
        total
    }

    /// Number of memoised triples (for diagnostics).
    pub fn cached(&self) -> usize {
        self.memo.len()
    }
}

/// `N(i, s, s)` for `i = 0..=s`, i.e. `C(s, i)^2 * i!`, in `O(s)` steps.
///
/// Each term follows from the previous one:
/// ```text
/// c_i = c_{i-1} * (s - i + 1)^2 / i
/// ```
/// and the division is exact. This agrees with [`FixedPointCounter`] on the
/// square board without its `O(s^3)` memo.
pub fn square_fixed_point_counts(s: u32) -> Vec<BigUint> {
    let mut counts = Vec::with_capacity(s as usize + 1);
    let mut current = BigUint::one();
    counts.push(current.clone());
    for i in 1..=s {
        let free = s - i + 1;
        current = current * free * free / i;
        counts.push(current.clone());
    }
    counts
}

/// One-shot `N(i, x, y)`; see [`FixedPointCounter`].
pub fn fixed_point_count(i: u32, x: u32, y: u32) -> BigUint {
    FixedPointCounter::new().count(i, x, y)
}
