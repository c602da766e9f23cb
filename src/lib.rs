//! Exact odds of winning Frustration solitaire.
//!
//! The chance is counted, not simulated: the forbidden positions of a
//! `ranks x suits` deck form a board whose rook polynomial, fed through
//! inclusion-exclusion, gives the number of winning deals out of
//! `(ranks * suits)!`.

pub mod error;
pub mod deck;
pub mod combinatorics;
pub mod polynomial;
pub mod rook;
pub mod moves;
pub mod chance;
pub mod game;
pub mod search;
pub mod stats;
pub mod display;

use clap::Parser;

pub use crate::chance::{compute_win_chance, win_probability, Chance, Percentage, DEFAULT_DECIMAL_PLACES};
pub use crate::deck::{DeckConfig, Limits};
pub use crate::error::{Error, Result};

/// Command-line surface of the `frustration` binary.
#[derive(Parser, Debug)]
#[command(author, version, about = "Exact chance of winning Frustration solitaire", long_about = None)]
pub struct Cli {
    /// Number of distinct ranks (falls back to 13 if not a positive integer)
    #[arg(long, default_value = "13")]
    pub ranks: String,
    /// Number of suits (falls back to 4 if not a positive integer)
    #[arg(long, default_value = "4")]
    pub suits: String,
    /// Decimal places of the printed percentage
    #[arg(long, default_value_t = DEFAULT_DECIMAL_PLACES)]
    pub places: u32,
    /// Print a sentence instead of the bare percentage
    #[arg(long)]
    pub sentence: bool,
    /// Refuse decks with more cards than this
    #[arg(long, default_value_t = deck::DEFAULT_MAX_CARDS)]
    pub max_cards: u64,
    /// Also count winning deals by exhaustive enumeration (small decks only)
    #[arg(long)]
    pub enumerate: bool,
    /// Node limit for --enumerate
    #[arg(long, default_value_t = search::SearchLimits::default().max_nodes)]
    pub max_nodes: u64,
    /// Print a table of chances for every deck up to <RANKS>x<SUITS>
    #[arg(long, value_name = "RANKSxSUITS")]
    pub table: Option<DeckConfig>,
}

/// Read one positive count from command-line text, falling back to
/// `default` when the text is not a positive integer.
fn resolve_count(name: &str, text: &str, default: u32) -> u32 {
    match text.trim().parse::<u32>() {
        Ok(value) if value >= 1 => value,
        _ => {
            log::warn!(
                "could not use {} {:?} (expected a positive integer); using default {}",
                name,
                text,
                default
            );
            default
        }
    }
}

/// Resolve the deck from command-line text. Each value falls back to the
/// standard deck's on its own, so `--ranks 6 --suits abc` deals 6x4.
fn resolve_config(ranks: &str, suits: &str) -> DeckConfig {
    let standard = DeckConfig::default();
    let r = resolve_count("ranks", ranks, standard.ranks());
    let s = resolve_count("suits", suits, standard.suits());
    DeckConfig::new(r as i64, s as i64).unwrap_or(standard)
}

/// Entry point for the `frustration` binary.
///
/// Example:
///   cargo run -- --ranks 13 --suits 4 --sentence
pub fn run() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let limits = Limits {
        max_cards: cli.max_cards,
    };

    if let Some(upper) = cli.table {
        let table = stats::chance_table(upper.ranks(), upper.suits(), &limits)?;
        print!("{}", display::render_table(&table, cli.places));
        return Ok(());
    }

    let config = resolve_config(&cli.ranks, &cli.suits);
    let chance = Chance::with_limits(config, &limits)?;

    if cli.sentence {
        println!("{}", display::render_sentence(&chance, cli.places));
    } else {
        println!("{}", display::render_plain(&chance, cli.places));
    }

    if cli.enumerate {
        let outcome = search::enumerate_deals(
            config,
            search::SearchLimits {
                max_nodes: cli.max_nodes,
            },
        );
        match outcome.chance() {
            Some(counted) => {
                println!(
                    "Enumeration: {} winning deals ({} nodes), {}",
                    counted.winning_deals(),
                    outcome.nodes_visited,
                    if counted == chance { "agrees" } else { "DISAGREES" }
                );
            }
            None => println!(
                "Enumeration stopped after {} nodes: {:?}",
                outcome.nodes_visited, outcome.termination
            ),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unusable_arguments_fall_back_to_standard_deck() {
        assert_eq!(resolve_config("2.5", "4"), DeckConfig::default());
        assert_eq!(resolve_config("0", "4"), DeckConfig::default());
        assert_eq!(resolve_config("6", "3"), DeckConfig::new(6, 3).unwrap());
    }

    #[test]
    fn each_argument_falls_back_on_its_own() {
        assert_eq!(resolve_config("6", "abc"), DeckConfig::new(6, 4).unwrap());
        assert_eq!(resolve_config("-2", "3"), DeckConfig::new(13, 3).unwrap());
        assert_eq!(resolve_config("", "2.5"), DeckConfig::default());
    }

    #[test]
    fn cli_defaults() {
        let cli = Cli::try_parse_from(["frustration"]).unwrap();
        assert_eq!(resolve_config(&cli.ranks, &cli.suits), DeckConfig::default());
        assert_eq!(cli.places, 3);
        assert!(cli.table.is_none());
    }

    #[test]
    fn cli_table_argument() {
        let cli = Cli::try_parse_from(["frustration", "--table", "4x3"]).unwrap();
        assert_eq!(cli.table, Some(DeckConfig::new(4, 3).unwrap()));
        assert!(Cli::try_parse_from(["frustration", "--table", "4"]).is_err());
    }
}
