//! Human-readable rendering of win chances.
//!
//! These are the text forms handed to the terminal: a bare percentage, a
//! sentence naming the deck, and a grid of chances for many decks.

use crate::chance::Chance;

/// Just the percentage, e.g. `"1.623"`.
pub fn render_plain(chance: &Chance, places: u32) -> String {
    chance.as_percentage(places).to_string()
}

/// A sentence embedding the deck shape and the percentage.
pub fn render_sentence(chance: &Chance, places: u32) -> String {
    let config = chance.config();
    format!(
        "With {} ranks and {} suits, the chance of winning Frustration is {}%",
        config.ranks(),
        config.suits(),
        chance.as_percentage(places)
    )
}

/// Render a table of chances with one row per rank count and one column per
/// suit count.
///
/// `chances` is expected in the order produced by `stats::chance_table`
/// (ranks-major). Cells missing from the input are left blank.
pub fn render_table(chances: &[Chance], places: u32) -> String {
    let max_ranks = chances.iter().map(|c| c.config().ranks()).max().unwrap_or(0);
    let max_suits = chances.iter().map(|c| c.config().suits()).max().unwrap_or(0);

    let cells: Vec<String> = chances
        .iter()
        .map(|c| c.as_percentage(places).to_string())
        .collect();
    let width = cells
        .iter()
        .map(|s| s.len())
        .max()
        .unwrap_or(0)
        .max("suits".len());

    let mut s = String::new();
    s.push_str(&format!("{:>6} |", "ranks"));
    for suits in 1..=max_suits {
        s.push_str(&format!(" {:>width$}", suits, width = width));
    }
    s.push('\n');
    s.push_str(&"-".repeat(8 + (width + 1) * max_suits as usize));
    s.push('\n');

    for ranks in 1..=max_ranks {
        s.push_str(&format!("{:>6} |", ranks));
        for suits in 1..=max_suits {
            let cell = chances
                .iter()
                .zip(&cells)
                .find(|(c, _)| c.config().ranks() == ranks && c.config().suits() == suits)
                .map(|(_, text)| text.as_str())
                .unwrap_or("");
            s.push_str(&format!(" {:>width$}", cell, width = width));
        }
        s.push('\n');
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{DeckConfig, Limits};
    use crate::stats::chance_table;

    #[test]
    fn plain_and_sentence() {
        let chance = Chance::compute(DeckConfig::default()).unwrap();
        assert_eq!(render_plain(&chance, 3), "1.623");
        assert_eq!(
            render_sentence(&chance, 2),
            "With 13 ranks and 4 suits, the chance of winning Frustration is 1.62%"
        );
    }

    #[test]
    fn table_layout() {
        let table = chance_table(2, 2, &Limits::default()).unwrap();
        let text = render_table(&table, 1);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], " ranks |     1     2");
        assert_eq!(lines[2], "     1 |   0.0   0.0");
        assert_eq!(lines[3], "     2 |  50.0  16.7");
    }

    #[test]
    fn empty_table_has_header_only() {
        let text = render_table(&[], 3);
        assert_eq!(text.lines().count(), 2);
    }
}
