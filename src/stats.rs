use rayon::prelude::*;

use crate::chance::Chance;
use crate::deck::{DeckConfig, Limits};
use crate::error::Result;

/// Tally of played deals, e.g. from an enumeration.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Stats {
    pub games_played: u64,
    pub games_won: u64,
    pub games_lost: u64,
}

impl Stats {
    pub fn record_win(&mut self) {
        self.games_played += 1;
        self.games_won += 1;
    }

    pub fn record_loss(&mut self) {
        self.games_played += 1;
        self.games_lost += 1;
    }

    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64
        }
    }
}

/// Exact chances for every deck from `1x1` up to `max_ranks x max_suits`,
/// ordered by ranks, then suits.
///
/// Cells are independent, so they are computed in parallel.
pub fn chance_table(max_ranks: u32, max_suits: u32, limits: &Limits) -> Result<Vec<Chance>> {
    let mut configs = Vec::with_capacity(max_ranks as usize * max_suits as usize);
    for ranks in 1..=max_ranks {
        for suits in 1..=max_suits {
            configs.push(DeckConfig::new(ranks as i64, suits as i64)?);
        }
    }
    log::info!("computing {} table cells", configs.len());
    configs
        .into_par_iter()
        .map(|config| Chance::with_limits(config, limits))
        .collect()
}
