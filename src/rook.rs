//! Rook polynomials of the Frustration forbidden-position board.
//!
//! Position `p` forbids every card whose rank equals `p % ranks`. Grouping
//! positions and cards by rank splits the board into `ranks` disjoint
//! `suits x suits` squares, so the rook polynomial of the whole board is the
//! square's polynomial raised to the power `ranks`.

use crate::combinatorics::square_fixed_point_counts;
use crate::deck::DeckConfig;
use crate::polynomial::Polynomial;

/// Rook polynomial of one `suits x suits` square: `suits + 1` terms, the
/// i-th being `N(i, suits, suits)`.
pub fn square_board(suits: u32) -> Polynomial {
    Polynomial::new(square_fixed_point_counts(suits))
}

/// Rook polynomial of the full `ranks * suits` board.
///
/// Has `ranks * suits + 1` terms; coefficient `i` counts the ways to place
/// `i` non-attacking rooks on forbidden squares.
pub fn rook_polynomial(config: DeckConfig) -> Polynomial {
    let squares = square_board(config.suits());
    let rook = squares.pow(config.ranks());
    log::debug!(
        "rook polynomial for {}: {} terms from a {}-term square",
        config,
        rook.len(),
        squares.len()
    );
    rook
}
