//! Exhaustive enumeration of Frustration deals.
//!
//! This is an independent check on the rook-polynomial count, not a
//! simulation: it walks every rank sequence the dealer could turn over,
//! abandoning a branch at the first match. Suits never influence the game,
//! so each winning rank sequence stands for `(suits!)^ranks` distinct card
//! orders.
//!
//! The walk is a depth-first search with an explicit stack and a node limit,
//! because the number of sequences grows factorially with the deck.

use num_bigint::BigUint;

use crate::chance::Chance;
use crate::combinatorics::factorial;
use crate::deck::DeckConfig;
use crate::stats::Stats;

/// Limits for an enumeration run.
#[derive(Clone, Copy, Debug)]
pub struct SearchLimits {
    /// Hard cap on the number of search nodes visited.
    pub max_nodes: u64,
}

impl Default for SearchLimits {
    fn default() -> Self {
        SearchLimits {
            max_nodes: 10_000_000,
        }
    }
}

/// Why an enumeration stopped.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Termination {
    /// Every rank sequence was accounted for.
    Exhausted,
    /// `SearchLimits::max_nodes` was hit; counts are partial.
    MaxNodesReached,
}

#[derive(Clone, Debug)]
pub struct EnumerationOutcome {
    pub config: DeckConfig,
    /// Winning rank sequences found.
    pub winning_sequences: u64,
    /// Winning card orders, `winning_sequences * (suits!)^ranks`.
    pub winning_deals: BigUint,
    /// Complete and abandoned sequences, as a tally.
    pub stats: Stats,
    pub nodes_visited: u64,
    pub termination: Termination,
}

impl EnumerationOutcome {
    /// The exact chance, if the enumeration ran to completion.
    pub fn chance(&self) -> Option<Chance> {
        match self.termination {
            Termination::Exhausted => Chance::from_counts(
                self.config,
                self.winning_deals.clone(),
                factorial(self.config.total_cards()),
            )
            .ok(),
            Termination::MaxNodesReached => None,
        }
    }
}

/// A partially dealt deck.
#[derive(Clone, Debug)]
struct SearchNode {
    /// Cards of each rank not yet dealt.
    remaining: Vec<u32>,
    /// Next position to deal.
    position: u64,
}

/// Count the winning deals of `config` by depth-first enumeration.
pub fn enumerate_deals(config: DeckConfig, limits: SearchLimits) -> EnumerationOutcome {
    let total = config.total_cards();
    let mut stack = vec![SearchNode {
        remaining: vec![config.suits(); config.ranks() as usize],
        position: 0,
    }];

    let mut stats = Stats::default();
    let mut winning_sequences: u64 = 0;
    let mut nodes_visited: u64 = 0;
    let mut termination = Termination::Exhausted;

    while let Some(node) = stack.pop() {
        nodes_visited += 1;
        if nodes_visited > limits.max_nodes {
            termination = Termination::MaxNodesReached;
            break;
        }

        if node.position == total {
            winning_sequences += 1;
            stats.record_win();
            continue;
        }

        let called = config.called_rank(node.position) as usize;
        for (rank, &left) in node.remaining.iter().enumerate().rev() {
            if left == 0 {
                continue;
            }
            if rank == called {
                // Turning this rank over here loses the game.
                stats.record_loss();
                continue;
            }
            let mut remaining = node.remaining.clone();
            remaining[rank] -= 1;
            stack.push(SearchNode {
                remaining,
                position: node.position + 1,
            });
        }
    }

    let suit_orders = factorial(config.suits() as u64).pow(config.ranks());
    let winning_deals = BigUint::from(winning_sequences) * suit_orders;

    log::debug!(
        "enumerated {}: {} winning sequences, {} nodes, {:?}",
        config,
        winning_sequences,
        nodes_visited,
        termination
    );

    EnumerationOutcome {
        config,
        winning_sequences,
        winning_deals,
        stats,
        nodes_visited,
        termination,
    }
}
