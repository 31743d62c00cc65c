//! Legal move generation.
//!
//! Candidate moves are produced per piece family and filtered against
//! the derived masks: a non-king move must land inside the side to
//! move's check mask, and a pinned piece must stay on its pin ray.
//! King moves are validated separately against enemy attacks with the
//! king lifted off the board, and en-passant candidates by actually
//! making the move. Under double check only king moves exist.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::types::{Move, MoveList, Piece, Square};
use super::Board;

impl Board {
    /// Generate all legal moves for the side to move.
    #[must_use]
    pub fn generate_moves(&mut self) -> MoveList {
        let color = self.side_to_move();
        let mut moves = MoveList::new();

        if self.in_double_check(color) {
            self.generate_king_moves(&mut moves);
            return moves;
        }

        self.generate_pawn_moves(&mut moves);
        self.generate_knight_moves(&mut moves);
        self.generate_slider_moves(Piece::Bishop, &mut moves);
        self.generate_slider_moves(Piece::Rook, &mut moves);
        self.generate_slider_moves(Piece::Queen, &mut moves);
        self.generate_king_moves(&mut moves);

        moves
    }

    /// Build a quiet or capturing move for `piece`, reading the
    /// captured piece kind out of the mailbox.
    pub(crate) fn create_move(&self, from: Square, to: Square, piece: Piece) -> Move {
        match self.piece_on(to) {
            Some(captured) => Move::capture(from, to, piece, captured),
            None => Move::quiet(from, to, piece),
        }
    }

    /// True if the side to move has no legal move and is in check.
    #[must_use]
    pub fn is_checkmate(&mut self) -> bool {
        let color = self.side_to_move();
        self.is_in_check(color) && self.generate_moves().is_empty()
    }

    /// True if the side to move has no legal move and is not in check.
    #[must_use]
    pub fn is_stalemate(&mut self) -> bool {
        let color = self.side_to_move();
        !self.is_in_check(color) && self.generate_moves().is_empty()
    }

    /// Count leaf nodes of the legal move tree at `depth`.
    #[must_use]
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.generate_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for m in &moves {
            self.make_move(m);
            nodes += self.perft(depth - 1);
            self.unmake_move(m);
        }

        nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_position_has_twenty_moves() {
        let mut board = Board::new();
        assert_eq!(board.generate_moves().len(), 20);
    }

    #[test]
    fn test_double_check_allows_only_king_moves() {
        // Rook e8 and bishop h4 both check e1; every answer moves the king
        let mut board = Board::from_fen("4r2k/8/8/8/7b/8/8/R3K3 w - - 0 1");
        let moves = board.generate_moves();
        assert!(!moves.is_empty());
        assert!(moves.iter().all(|m| m.piece() == Piece::King));
    }

    #[test]
    fn test_check_evasion_by_block_or_capture() {
        // Rook e8 checks e1; the a-file rook can block on e4 via a4,
        // nothing can capture the checker
        let mut board = Board::from_fen("4r2k/8/8/8/R7/8/8/4K3 w - - 0 1");
        let moves = board.generate_moves();
        assert!(moves.iter().any(|m| m.to().to_string() == "e4"));
        // Non-king moves must all land on the checking ray
        for m in moves.iter().filter(|m| m.piece() != Piece::King) {
            assert_eq!(m.to().file(), 4, "{m} does not resolve the check");
        }
    }

    #[test]
    fn test_checkmate_and_stalemate_probes() {
        let mut mated = Board::from_fen("R3k3/1R6/8/8/8/8/8/4K3 b - - 0 1");
        assert!(mated.is_checkmate());
        assert!(!mated.is_stalemate());

        let mut stale = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
        assert!(stale.is_stalemate());
        assert!(!stale.is_checkmate());

        let mut open = Board::new();
        assert!(!open.is_checkmate());
        assert!(!open.is_stalemate());
    }

    #[test]
    fn test_perft_depth_zero_and_one() {
        let mut board = Board::new();
        assert_eq!(board.perft(0), 1);
        assert_eq!(board.perft(1), 20);
    }
}
