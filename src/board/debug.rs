//! Debug-build invariant checks.

#[cfg(debug_assertions)]
use super::types::{Color, Piece, Square};
#[cfg(debug_assertions)]
use super::Board;

#[cfg(debug_assertions)]
impl Board {
    /// Verify the structural invariants tying the board together:
    /// the mailbox names exactly the bitboard bit set on every
    /// square, the aggregates are the union of the piece boards, and
    /// each side has exactly one king. Called after every make and
    /// unmake in debug builds.
    pub(crate) fn assert_consistent(&self) {
        for idx in 0..64 {
            let sq = Square::from_index(idx);
            let from_bitboards = Color::BOTH.iter().find_map(|&color| {
                Piece::ALL
                    .iter()
                    .find(|&&piece| self.pieces_of(color, piece).contains(sq))
                    .map(|&piece| (color, piece))
            });
            assert_eq!(
                self.mailbox[idx],
                from_bitboards,
                "mailbox and bitboards disagree on {sq}"
            );
        }

        for color in Color::BOTH {
            let mut union = 0u64;
            for piece in Piece::ALL {
                union |= self.pieces_of(color, piece).0;
            }
            assert_eq!(
                self.occupied[color.index()].0, union,
                "{color} aggregate out of sync"
            );
            assert_eq!(
                self.pieces_of(color, Piece::King).popcount(),
                1,
                "{color} must have exactly one king"
            );
        }
        assert_eq!(
            self.all_occupied.0,
            self.occupied[0].0 | self.occupied[1].0,
            "total occupancy out of sync"
        );
    }
}
