//! The chance of winning Frustration for a given deck.
//!
//! `Chance` is computed once from a `DeckConfig` and never changes:
//!   - `winning_deals` comes from the inclusion-exclusion count,
//!   - `total_deals` is `(ranks * suits)!`.
//!
//! The ratio is kept exact (`BigRational`); floating point only appears in
//! `as_probability`, and percentages are rounded on the exact value.

use core::fmt;

use num_bigint::{BigInt, BigUint};
use num_rational::BigRational;
use num_traits::{ToPrimitive, Zero};

use crate::combinatorics::factorial;
use crate::deck::{DeckConfig, Limits};
use crate::error::{Error, Result};
use crate::moves::allowed_moves;

/// Decimal places used when the caller does not ask for a precision.
pub const DEFAULT_DECIMAL_PLACES: u32 = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chance {
    config: DeckConfig,
    winning_deals: BigUint,
    total_deals: BigUint,
}

impl Chance {
    /// Exact chance for `config` under the default `Limits`.
    pub fn compute(config: DeckConfig) -> Result<Self> {
        Self::with_limits(config, &Limits::default())
    }

    pub fn with_limits(config: DeckConfig, limits: &Limits) -> Result<Self> {
        config.check(limits)?;
        let winning_deals = allowed_moves(config)?;
        let total_deals = factorial(config.total_cards());
        log::info!(
            "{}: {} of {} deals win",
            config,
            winning_deals,
            total_deals
        );
        Ok(Chance {
            config,
            winning_deals,
            total_deals,
        })
    }

    /// Wrap counts obtained some other way, e.g. by enumeration.
    ///
    /// `total_deals` must be positive and at least `winning_deals`.
    pub fn from_counts(
        config: DeckConfig,
        winning_deals: BigUint,
        total_deals: BigUint,
    ) -> Result<Self> {
        if total_deals.is_zero() || winning_deals > total_deals {
            return Err(Error::InvalidCounts {
                winning: winning_deals.to_string(),
                total: total_deals.to_string(),
            });
        }
        Ok(Chance {
            config,
            winning_deals,
            total_deals,
        })
    }

    pub fn config(&self) -> DeckConfig {
        self.config
    }

    pub fn winning_deals(&self) -> &BigUint {
        &self.winning_deals
    }

    pub fn total_deals(&self) -> &BigUint {
        &self.total_deals
    }

    /// The exact ratio `winning_deals / total_deals`, in lowest terms.
    pub fn as_ratio(&self) -> BigRational {
        BigRational::new(
            BigInt::from(self.winning_deals.clone()),
            BigInt::from(self.total_deals.clone()),
        )
    }

    /// Nearest `f64` to the exact ratio.
    pub fn as_probability(&self) -> f64 {
        // Finite for any ratio in [0, 1].
        self.as_ratio().to_f64().unwrap_or(0.0)
    }

    /// `100 * ratio`, rounded half up to `places` decimal places.
    pub fn as_percentage(&self, places: u32) -> Percentage {
        let scale = BigUint::from(10u32).pow(places);
        let numerator = &self.winning_deals * 100u32 * scale;
        let mut scaled = &numerator / &self.total_deals;
        let remainder = &numerator % &self.total_deals;
        if !remainder.is_zero() && remainder * 2u32 >= self.total_deals {
            scaled += 1u32;
        }
        Percentage { scaled, places }
    }
}

/// A fixed-point decimal: `scaled / 10^places`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Percentage {
    scaled: BigUint,
    places: u32,
}

impl Percentage {
    pub fn places(&self) -> u32 {
        self.places
    }

    /// The value multiplied by `10^places`.
    pub fn scaled(&self) -> &BigUint {
        &self.scaled
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.scaled.to_string();
        let places = self.places as usize;
        if places == 0 {
            return f.write_str(&digits);
        }
        // Left-pad so there is at least one digit before the point.
        let padded = format!("{:0>width$}", digits, width = places + 1);
        let (whole, fraction) = padded.split_at(padded.len() - places);
        write!(f, "{}.{}", whole, fraction)
    }
}

/// Exact probability of winning with `config`.
pub fn win_probability(config: DeckConfig) -> Result<BigRational> {
    Ok(Chance::compute(config)?.as_ratio())
}

/// Win chance as a percentage string, e.g. `"1.623"` for 13 ranks and 4 suits.
pub fn compute_win_chance(ranks: i64, suits: i64, places: u32) -> Result<String> {
    let config = DeckConfig::new(ranks, suits)?;
    Ok(Chance::compute(config)?.as_percentage(places).to_string())
}
