//! Reversible state transitions.
//!
//! `make_move` pushes the scalar state onto the save stack by value,
//! applies the move to bitboards and mailbox, updates castling
//! rights, en-passant square and clocks, flips the side to move and
//! recomputes the derived masks. `unmake_move` reverses the board
//! edits from the move record alone and pops the stack.
//!
//! Both operations expect moves produced by `generate_moves` on the
//! current position; anything else is a caller error, guarded by
//! debug assertions only.

use super::types::{Color, Move, Piece, Square};
use super::Board;

/// Home corner of the rook for a castling side.
fn rook_home(color: Color, kingside: bool) -> Square {
    match (color, kingside) {
        (Color::White, true) => Square::H1,
        (Color::White, false) => Square::A1,
        (Color::Black, true) => Square::H8,
        (Color::Black, false) => Square::A8,
    }
}

/// Rook source and destination for a castling move.
fn castle_rook_squares(color: Color, kingside: bool) -> (Square, Square) {
    match (color, kingside) {
        (Color::White, true) => (Square::H1, Square::F1),
        (Color::White, false) => (Square::A1, Square::D1),
        (Color::Black, true) => (Square::H8, Square::F8),
        (Color::Black, false) => (Square::A8, Square::D8),
    }
}

impl Board {
    /// Apply `m` to the position.
    pub fn make_move(&mut self, m: &Move) {
        debug_assert_eq!(
            self.piece_at(m.from()),
            Some((self.state.side_to_move, m.piece())),
            "make_move: from-square does not hold the moving piece"
        );

        let color = self.state.side_to_move;
        let enemy = color.opponent();
        self.history.push(self.state);

        if color == Color::Black {
            self.state.fullmove_number += 1;
        }
        self.state.halfmove_clock += 1;

        // Clear the captured piece first so the destination is free
        if m.is_en_passant() {
            self.remove_piece(m.to().behind(color), enemy, Piece::Pawn);
        } else if let Some(captured) = m.captured() {
            self.remove_piece(m.to(), enemy, captured);
        }

        if let Some(promoted) = m.promotion() {
            self.remove_piece(m.from(), color, Piece::Pawn);
            self.set_piece(m.to(), color, promoted);
        } else {
            self.move_piece(m.from(), m.to(), color, m.piece());
        }

        if m.is_castling() {
            let (rook_from, rook_to) = castle_rook_squares(color, m.is_castle_kingside());
            self.move_piece(rook_from, rook_to, color, Piece::Rook);
        }

        // Castling rights: a king move clears both of the mover's
        // rights, a rook leaving its corner clears that side, and a
        // rook captured on its corner clears the enemy's side
        if m.piece() == Piece::King {
            self.state.castling_rights.remove(color, true);
            self.state.castling_rights.remove(color, false);
        } else if m.piece() == Piece::Rook {
            if m.from() == rook_home(color, true) {
                self.state.castling_rights.remove(color, true);
            } else if m.from() == rook_home(color, false) {
                self.state.castling_rights.remove(color, false);
            }
        }
        if m.captured() == Some(Piece::Rook) {
            if m.to() == rook_home(enemy, true) {
                self.state.castling_rights.remove(enemy, true);
            } else if m.to() == rook_home(enemy, false) {
                self.state.castling_rights.remove(enemy, false);
            }
        }

        self.state.ep_square = None;
        if m.piece() == Piece::Pawn {
            self.state.halfmove_clock = 0;
            let from = m.from().index();
            let to = m.to().index();
            if from.abs_diff(to) == 16 {
                self.state.ep_square = Some(Square::from_index((from + to) / 2));
            }
        }
        if m.is_capture() {
            self.state.halfmove_clock = 0;
        }

        self.state.side_to_move = enemy;
        self.update_masks();

        #[cfg(debug_assertions)]
        self.assert_consistent();
    }

    /// Reverse `m`, which must be the move most recently made.
    pub fn unmake_move(&mut self, m: &Move) {
        let previous = self
            .history
            .pop()
            .expect("unmake_move without a matching make_move");
        let color = previous.side_to_move;
        let enemy = color.opponent();

        if let Some(promoted) = m.promotion() {
            self.remove_piece(m.to(), color, promoted);
            self.set_piece(m.from(), color, Piece::Pawn);
        } else {
            self.move_piece(m.to(), m.from(), color, m.piece());
        }

        if m.is_castling() {
            let (rook_from, rook_to) = castle_rook_squares(color, m.is_castle_kingside());
            self.move_piece(rook_to, rook_from, color, Piece::Rook);
        }

        if m.is_en_passant() {
            self.set_piece(m.to().behind(color), enemy, Piece::Pawn);
        } else if let Some(captured) = m.captured() {
            self.set_piece(m.to(), enemy, captured);
        }

        self.state = previous;
        self.update_masks();

        #[cfg(debug_assertions)]
        self.assert_consistent();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn find_move(board: &mut Board, uci: &str) -> Move {
        board
            .generate_moves()
            .find_uci(uci)
            .unwrap_or_else(|| panic!("expected {uci} to be legal"))
    }

    #[test]
    fn test_make_quiet_move() {
        let mut board = Board::new();
        let m = find_move(&mut board, "e2e4");
        board.make_move(&m);
        assert_eq!(board.piece_on(sq("e4")), Some(Piece::Pawn));
        assert!(board.piece_at(sq("e2")).is_none());
        assert_eq!(board.side_to_move(), Color::Black);
    }

    #[test]
    fn test_double_push_sets_ep_square() {
        let mut board = Board::new();
        let m = find_move(&mut board, "e2e4");
        board.make_move(&m);
        assert_eq!(board.en_passant_square(), Some(sq("e3")));

        let reply = find_move(&mut board, "g8f6");
        board.make_move(&reply);
        assert_eq!(board.en_passant_square(), None);
    }

    #[test]
    fn test_halfmove_clock_resets_on_pawn_move_and_capture() {
        let mut board = Board::from_fen("r3k3/8/8/8/8/8/P7/R3K3 w Qq - 7 20");
        let m = find_move(&mut board, "a2a3");
        board.make_move(&m);
        assert_eq!(board.halfmove_clock(), 0);

        let m = find_move(&mut board, "a8a3");
        board.make_move(&m);
        assert_eq!(board.halfmove_clock(), 0);

        let m = find_move(&mut board, "a1a3");
        board.make_move(&m);
        assert_eq!(board.halfmove_clock(), 0);
    }

    #[test]
    fn test_fullmove_increments_after_black() {
        let mut board = Board::new();
        let m = find_move(&mut board, "e2e4");
        board.make_move(&m);
        assert_eq!(board.fullmove_number(), 1);
        let m = find_move(&mut board, "e7e5");
        board.make_move(&m);
        assert_eq!(board.fullmove_number(), 2);
    }

    #[test]
    fn test_king_move_clears_castling_rights() {
        let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let m = find_move(&mut board, "e1e2");
        board.make_move(&m);
        assert!(!board.castling_rights().has(Color::White, true));
        assert!(!board.castling_rights().has(Color::White, false));
        assert!(board.castling_rights().has(Color::Black, true));

        board.unmake_move(&m);
        assert!(board.castling_rights().has(Color::White, true));
    }

    #[test]
    fn test_rook_move_clears_one_side() {
        let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let m = find_move(&mut board, "h1g1");
        board.make_move(&m);
        assert!(!board.castling_rights().has(Color::White, true));
        assert!(board.castling_rights().has(Color::White, false));
    }

    #[test]
    fn test_rook_capture_clears_enemy_right() {
        let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let m = find_move(&mut board, "a1a8");
        board.make_move(&m);
        assert!(!board.castling_rights().has(Color::Black, false));
        assert!(board.castling_rights().has(Color::Black, true));
    }

    #[test]
    fn test_castle_moves_rook() {
        let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let m = find_move(&mut board, "e1g1");
        assert!(m.is_castling());
        board.make_move(&m);
        assert_eq!(board.piece_on(Square::G1), Some(Piece::King));
        assert_eq!(board.piece_on(Square::F1), Some(Piece::Rook));
        assert!(board.piece_at(Square::H1).is_none());

        board.unmake_move(&m);
        assert_eq!(board.piece_on(Square::E1), Some(Piece::King));
        assert_eq!(board.piece_on(Square::H1), Some(Piece::Rook));
        assert!(board.piece_at(Square::F1).is_none());
    }

    #[test]
    fn test_queenside_castle_moves_rook() {
        let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1");
        let m = find_move(&mut board, "e8c8");
        board.make_move(&m);
        assert_eq!(board.piece_on(Square::C8), Some(Piece::King));
        assert_eq!(board.piece_on(Square::D8), Some(Piece::Rook));
        assert!(board.piece_at(Square::A8).is_none());
    }

    #[test]
    fn test_en_passant_removes_and_restores_victim() {
        let mut board =
            Board::from_fen("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3");
        let m = find_move(&mut board, "e5d6");
        assert!(m.is_en_passant());
        board.make_move(&m);
        assert!(board.piece_at(sq("d5")).is_none(), "victim removed");
        assert_eq!(board.piece_on(sq("d6")), Some(Piece::Pawn));

        board.unmake_move(&m);
        assert_eq!(board.piece_on(sq("d5")), Some(Piece::Pawn));
        assert_eq!(board.piece_on(sq("e5")), Some(Piece::Pawn));
        assert!(board.piece_at(sq("d6")).is_none());
    }

    #[test]
    fn test_promotion_make_unmake() {
        let mut board = Board::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
        let m = find_move(&mut board, "a7a8q");
        board.make_move(&m);
        assert_eq!(board.piece_on(Square::A8), Some(Piece::Queen));
        assert!(board.pieces_of(Color::White, Piece::Pawn).is_empty());

        board.unmake_move(&m);
        assert_eq!(board.piece_on(sq("a7")), Some(Piece::Pawn));
        assert!(board.pieces_of(Color::White, Piece::Queen).is_empty());
    }

    #[test]
    fn test_promotion_capture_restores_victim() {
        let mut board = Board::from_fen("1n5k/P7/8/8/8/8/8/K7 w - - 0 1");
        let m = find_move(&mut board, "a7b8q");
        board.make_move(&m);
        assert_eq!(board.piece_at(Square::B8), Some((Color::White, Piece::Queen)));

        board.unmake_move(&m);
        assert_eq!(board.piece_at(Square::B8), Some((Color::Black, Piece::Knight)));
        assert_eq!(board.piece_on(sq("a7")), Some(Piece::Pawn));
    }

    #[test]
    fn test_make_unmake_restores_board_exactly() {
        let mut board =
            Board::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
        let snapshot = board.clone();
        let moves = board.generate_moves();
        for m in &moves {
            board.make_move(m);
            board.unmake_move(m);
            assert_eq!(board, snapshot, "state differs after {m}");
        }
    }
}
