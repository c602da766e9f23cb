//! Counting the allowed (winning) deals by inclusion-exclusion.
//!
//! With `n = ranks * suits` cards and rook coefficients `r_i` of the
//! forbidden board, the number of permutations avoiding every forbidden
//! square is
//! ```text
//! sum_{i=0}^{n} (-1)^i * r_i * (n - i)!
//! ```

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;

use crate::combinatorics::factorials_up_to;
use crate::deck::DeckConfig;
use crate::error::{Error, Result};
use crate::polynomial::Polynomial;
use crate::rook::rook_polynomial;

/// Signed inclusion-exclusion sum over the rook coefficients.
///
/// Coefficients past the polynomial's degree count as zero. A negative total
/// means the inputs are not a rook polynomial of an `n`-card board and is
/// reported as `Error::NegativeCount`.
pub fn alternating_sum(rook: &Polynomial, total_cards: u64) -> Result<BigUint> {
    let factorials = factorials_up_to(total_cards);
    let mut sum = BigInt::zero();

    for (i, r_i) in rook.coefficients().iter().enumerate() {
        let i = i as u64;
        if i > total_cards {
            break;
        }
        let term = r_i * &factorials[(total_cards - i) as usize];
        if i % 2 == 0 {
            sum += BigInt::from_biguint(Sign::Plus, term);
        } else {
            sum -= BigInt::from_biguint(Sign::Plus, term);
        }
    }

    sum.to_biguint().ok_or(Error::NegativeCount)
}

/// Number of deals of `config` that win Frustration.
pub fn allowed_moves(config: DeckConfig) -> Result<BigUint> {
    let rook = rook_polynomial(config);
    let allowed = alternating_sum(&rook, config.total_cards())?;
    log::debug!("{} allows {} winning deals", config, allowed);
    Ok(allowed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinatorics::factorial;

    fn cfg(ranks: i64, suits: i64) -> DeckConfig {
        DeckConfig::new(ranks, suits).unwrap()
    }

    #[test]
    fn known_small_counts() {
        let cases: [(i64, i64, u64); 8] = [
            (1, 1, 0),
            (2, 1, 1),
            (2, 2, 4),
            (3, 2, 80),
            (2, 3, 36),
            (3, 3, 12_096),
            (4, 1, 9),
            (4, 2, 4_752),
        ];
        for (r, s, expected) in cases {
            assert_eq!(
                allowed_moves(cfg(r, s)).unwrap(),
                BigUint::from(expected),
                "{}x{}",
                r,
                s
            );
        }
    }

    #[test]
    fn one_suit_gives_derangements() {
        // With one suit every rank appears once: the winning deals are the
        // derangements of `ranks` items.
        let derangements = [1u64, 0, 1, 2, 9, 44, 265, 1_854, 14_833];
        for (n, d) in derangements.iter().enumerate().skip(1) {
            assert_eq!(allowed_moves(cfg(n as i64, 1)).unwrap(), BigUint::from(*d));
        }
    }

    #[test]
    fn single_rank_never_wins() {
        for suits in 1..=6 {
            assert!(allowed_moves(cfg(1, suits)).unwrap().is_zero());
        }
    }

    #[test]
    fn standard_deck_count() {
        let allowed = allowed_moves(DeckConfig::default()).unwrap();
        assert_eq!(
            allowed.to_string(),
            "1309302175551177162931045000259922525308763433362019257020678406144"
        );
        assert!(allowed < factorial(52));
    }

    #[test]
    fn missing_coefficients_are_zero() {
        // The empty board: only r_0 = 1, so every permutation is allowed.
        let empty_board = Polynomial::from(vec![1]);
        assert_eq!(alternating_sum(&empty_board, 5).unwrap(), factorial(5));
    }

    #[test]
    fn extra_coefficients_are_ignored() {
        let padded = Polynomial::from(vec![1, 0, 0, 7, 7]);
        assert_eq!(alternating_sum(&padded, 2).unwrap(), factorial(2));
    }

    #[test]
    fn negative_total_is_an_error() {
        // Not a rook polynomial: a one-card board has at most one rook square.
        let bogus = Polynomial::from(vec![1, 3]);
        assert_eq!(alternating_sum(&bogus, 1), Err(Error::NegativeCount));
    }
}
