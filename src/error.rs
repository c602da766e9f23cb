//! Error type shared by every computation in the crate.
//!
//! All helpers are pure and fail fast: an invalid deck is rejected before any
//! counting starts, and nothing is clamped or retried.

use thiserror::Error;

/// Errors produced while configuring or evaluating a Frustration deck.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Ranks or suits were non-positive or not an integer.
    #[error("invalid configuration (ranks = {ranks}, suits = {suits}): {reason}")]
    InvalidConfiguration {
        ranks: String,
        suits: String,
        reason: String,
    },
    /// The deck exceeds the configured card limit.
    #[error("too many cards: {cards} (max {max})")]
    TooManyCards { cards: u64, max: u64 },
    /// A dealt sequence is not a permutation of the deck.
    #[error("invalid deal: {0}")]
    InvalidDeal(String),
    /// Deal counts that cannot form a probability.
    #[error("invalid deal counts: {winning} winning of {total} total")]
    InvalidCounts { winning: String, total: String },
    /// The inclusion-exclusion sum went negative.
    #[error("inclusion-exclusion produced a negative count")]
    NegativeCount,
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid(
        ranks: impl ToString,
        suits: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        Error::InvalidConfiguration {
            ranks: ranks.to_string(),
            suits: suits.to_string(),
            reason: reason.into(),
        }
    }
}
