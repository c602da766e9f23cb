//! Playing a single Frustration deal.
//!
//! The player turns the cards over one by one, calling "ace, two, ..., king"
//! and starting again at "ace" after each full cycle of ranks. The game is
//! lost as soon as a card's rank equals the rank being called, and won if the
//! whole deck is dealt without a match.
//!
//! This module is not used by the counting engine; it defines what a win
//! *is*, so enumeration and brute-force checks can be compared against the
//! rook-polynomial count.

use crate::deck::DeckConfig;
use crate::error::{Error, Result};

/// Result of dealing one complete sequence of cards.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DealOutcome {
    /// Every card was dealt without a match.
    Won,
    /// The card at `position` had the called `rank`.
    Lost { position: u64, rank: u32 },
}

impl DealOutcome {
    pub fn is_win(self) -> bool {
        matches!(self, DealOutcome::Won)
    }
}

/// Deal `deal` (card indices, top of the deck first) and report the outcome.
///
/// `deal` must be a permutation of `0..config.total_cards()`.
pub fn play_deal(config: DeckConfig, deal: &[u32]) -> Result<DealOutcome> {
    validate_deal(config, deal)?;
    for (position, &card) in deal.iter().enumerate() {
        let position = position as u64;
        let rank = config.card_rank(card);
        if rank == config.called_rank(position) {
            return Ok(DealOutcome::Lost { position, rank });
        }
    }
    Ok(DealOutcome::Won)
}

fn validate_deal(config: DeckConfig, deal: &[u32]) -> Result<()> {
    let total = config.total_cards() as usize;
    if deal.len() != total {
        return Err(Error::InvalidDeal(format!(
            "expected {} cards, got {}",
            total,
            deal.len()
        )));
    }
    let mut seen = vec![false; total];
    for &card in deal {
        let idx = card as usize;
        if idx >= total {
            return Err(Error::InvalidDeal(format!(
                "card index {} out of range for a {} deck",
                card, config
            )));
        }
        if seen[idx] {
            return Err(Error::InvalidDeal(format!("duplicate card index {}", card)));
        }
        seen[idx] = true;
    }
    Ok(())
}

/// A deal that always wins, if one exists.
///
/// Every position receives a card one rank above the called rank, which is
/// only possible with at least two ranks.
pub fn canonical_winning_deal(config: DeckConfig) -> Result<Option<Vec<u32>>> {
    let total = config.indexable_cards()?;
    let ranks = config.ranks();
    if ranks < 2 {
        return Ok(None);
    }
    let deal = (0..total)
        .map(|position| {
            let suit = position / ranks;
            let rank = (config.called_rank(position as u64) + 1) % ranks;
            suit * ranks + rank
        })
        .collect();
    Ok(Some(deal))
}

/// The deck in index order, which matches on the very first card.
pub fn canonical_losing_deal(config: DeckConfig) -> Result<Vec<u32>> {
    config.cards()
}
