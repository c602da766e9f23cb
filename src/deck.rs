//! Deck configuration for Frustration.
//!
//! - `DeckConfig` is the only input of the whole computation: how many
//!   distinct ranks and how many suits the deck has.
//! - `Limits` bounds how large a deck we are willing to count.
//!
//! Cards are numbered `0..total_cards` in suit-major order, so the mapping is:
//! ```text
//! index = suit * ranks + rank
//! ```
//! and the rank called out while dealing position `p` is `p % ranks`.

use core::fmt;
use core::str::FromStr;

use crate::error::{Error, Result};

/// Number of ranks in a standard deck.
pub const NUM_RANKS: u32 = 13;
/// Number of suits in a standard deck.
pub const NUM_SUITS: u32 = 4;
/// Default upper bound on `ranks * suits`.
pub const DEFAULT_MAX_CARDS: u64 = 2_048;

/// Resource limits for a single computation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limits {
    /// Largest deck (in cards) that will be counted.
    pub max_cards: u64,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_cards: DEFAULT_MAX_CARDS,
        }
    }
}

/// A deck of `ranks` distinct ranks, each present in `suits` suits.
///
/// Both fields are strictly positive; the constructors are the only way to
/// build one.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct DeckConfig {
    ranks: u32,
    suits: u32,
}

impl Default for DeckConfig {
    fn default() -> Self {
        DeckConfig {
            ranks: NUM_RANKS,
            suits: NUM_SUITS,
        }
    }
}

impl DeckConfig {
    /// Build a configuration from signed integers.
    ///
    /// Non-positive values (and values beyond `u32`) are rejected with
    /// `Error::InvalidConfiguration`.
    pub fn new(ranks: i64, suits: i64) -> Result<Self> {
        if ranks < 1 || suits < 1 {
            return Err(Error::invalid(ranks, suits, "ranks and suits must be at least 1"));
        }
        let r = u32::try_from(ranks)
            .map_err(|_| Error::invalid(ranks, suits, "ranks out of range"))?;
        let s = u32::try_from(suits)
            .map_err(|_| Error::invalid(ranks, suits, "suits out of range"))?;
        Ok(DeckConfig { ranks: r, suits: s })
    }

    /// Build a configuration from text, e.g. command-line arguments.
    ///
    /// Anything that is not a plain integer (`"2.5"`, `"four"`, `""`) is an
    /// `Error::InvalidConfiguration`.
    pub fn parse(ranks: &str, suits: &str) -> Result<Self> {
        let r = parse_integer(ranks).ok_or_else(|| {
            Error::invalid(ranks, suits, format!("ranks {:?} is not an integer", ranks))
        })?;
        let s = parse_integer(suits).ok_or_else(|| {
            Error::invalid(ranks, suits, format!("suits {:?} is not an integer", suits))
        })?;
        Self::new(r, s)
    }

    /// Number of distinct ranks.
    #[inline]
    pub fn ranks(self) -> u32 {
        self.ranks
    }

    /// Number of suits.
    #[inline]
    pub fn suits(self) -> u32 {
        self.suits
    }

    /// Number of cards in the deck.
    #[inline]
    pub fn total_cards(self) -> u64 {
        self.ranks as u64 * self.suits as u64
    }

    /// Reject decks beyond `limits.max_cards`.
    pub fn check(self, limits: &Limits) -> Result<()> {
        let cards = self.total_cards();
        if cards > limits.max_cards {
            return Err(Error::TooManyCards {
                cards,
                max: limits.max_cards,
            });
        }
        Ok(())
    }

    /// Rank called out when dealing `position` (0-based).
    #[inline]
    pub fn called_rank(self, position: u64) -> u32 {
        (position % self.ranks as u64) as u32
    }

    /// Rank of the card with index `card`.
    #[inline]
    pub fn card_rank(self, card: u32) -> u32 {
        card % self.ranks
    }

    /// The deck in index order `0..total_cards`.
    ///
    /// Card indices are `u32`, so decks beyond `u32::MAX` cards are refused
    /// with `Error::TooManyCards`.
    pub fn cards(self) -> Result<Vec<u32>> {
        let total = self.indexable_cards()?;
        Ok((0..total).collect())
    }

    /// `total_cards` as a `u32` card-index bound.
    pub(crate) fn indexable_cards(self) -> Result<u32> {
        let cards = self.total_cards();
        u32::try_from(cards).map_err(|_| Error::TooManyCards {
            cards,
            max: u32::MAX as u64,
        })
    }
}

fn parse_integer(text: &str) -> Option<i64> {
    text.trim().parse::<i64>().ok()
}

impl fmt::Display for DeckConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.ranks, self.suits)
    }
}

/// Parses the compact `"<ranks>x<suits>"` form, e.g. `"13x4"`.
impl FromStr for DeckConfig {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().split_once(['x', 'X']) {
            Some((ranks, suits)) => DeckConfig::parse(ranks, suits),
            None => Err(Error::invalid(s, "?", "expected <ranks>x<suits>")),
        }
    }
}
