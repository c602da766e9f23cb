//! Cross-checks of the rook-polynomial count against direct play.
//!
//! Two independent oracles:
//!   * `search::enumerate_deals` walks every rank sequence;
//!   * a brute-force loop plays every permutation of distinct cards through
//!     `game::play_deal`.

use num_bigint::BigUint;
use num_traits::Zero;

use frustration::game::play_deal;
use frustration::moves::allowed_moves;
use frustration::search::{enumerate_deals, SearchLimits, Termination};
use frustration::{compute_win_chance, DeckConfig, Error};

/// Lexicographic next permutation; returns false after the last one.
fn next_permutation(items: &mut [u32]) -> bool {
    if items.len() < 2 {
        return false;
    }
    let mut i = items.len() - 1;
    while i > 0 && items[i - 1] >= items[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }
    let mut j = items.len() - 1;
    while items[j] <= items[i - 1] {
        j -= 1;
    }
    items.swap(i - 1, j);
    items[i..].reverse();
    true
}

fn brute_force_wins(config: DeckConfig) -> u64 {
    let mut deal = config.cards().unwrap();
    let mut wins = 0;
    loop {
        if play_deal(config, &deal).unwrap().is_win() {
            wins += 1;
        }
        if !next_permutation(&mut deal) {
            break;
        }
    }
    wins
}

#[test]
fn rook_count_matches_brute_force() {
    for ranks in 1..=3 {
        for suits in 1..=3 {
            let config = DeckConfig::new(ranks, suits).unwrap();
            let expected = BigUint::from(brute_force_wins(config));
            assert_eq!(allowed_moves(config).unwrap(), expected, "{}", config);
        }
    }
}

#[test]
fn rook_count_matches_enumeration() {
    for ranks in 1..=4 {
        for suits in 1..=3 {
            let config = DeckConfig::new(ranks, suits).unwrap();
            let outcome = enumerate_deals(config, SearchLimits::default());
            assert_eq!(outcome.termination, Termination::Exhausted);
            assert_eq!(
                allowed_moves(config).unwrap(),
                outcome.winning_deals,
                "{}",
                config
            );
        }
    }
}

#[test]
fn one_rank_never_wins() {
    for suits in 1..=8 {
        let config = DeckConfig::new(1, suits).unwrap();
        assert!(allowed_moves(config).unwrap().is_zero());
    }
}

#[test]
fn standard_deck_baseline() {
    assert_eq!(compute_win_chance(13, 4, 3).unwrap(), "1.623");
    assert_eq!(compute_win_chance(13, 4, 0).unwrap(), "2");
}

#[test]
fn invalid_configurations() {
    assert!(matches!(
        compute_win_chance(0, 4, 3),
        Err(Error::InvalidConfiguration { .. })
    ));
    assert!(matches!(
        compute_win_chance(13, -1, 3),
        Err(Error::InvalidConfiguration { .. })
    ));
    assert!(matches!(
        DeckConfig::parse("2.5", "4"),
        Err(Error::InvalidConfiguration { .. })
    ));
}
