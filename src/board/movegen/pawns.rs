//! Pawn move generation: pushes, captures, promotions, en passant.

use super::super::attack_tables::{PAWN_ATTACKS, PAWN_PUSHES};
use super::super::types::{
    bit_for_square, Bitboard, Color, Move, MoveList, Piece, PROMOTION_PIECES,
};
use super::super::Board;

impl Board {
    pub(crate) fn generate_pawn_moves(&mut self, moves: &mut MoveList) {
        let color = self.side_to_move();
        let c = color.index();
        let enemy_occ = self.occupied_by(color.opponent()).0;
        let promotion_rank = color.pawn_promotion_rank();

        for from in self.pieces[c][Piece::Pawn.index()].iter() {
            let idx = from.index();
            let allowed = self.legal_targets_mask(color, from);

            // Pushes: a blocked single push blocks the double push too,
            // and an occupied far square trims it
            let mut pushes = PAWN_PUSHES[c][idx];
            if pushes != 0 {
                let step = if color == Color::White { idx + 8 } else { idx - 8 };
                if self.all_occupied.0 & (1u64 << step) != 0 {
                    pushes = 0;
                } else {
                    pushes &= !self.all_occupied.0;
                }
            }
            pushes &= allowed;

            for to in Bitboard(pushes).iter() {
                if to.rank() == promotion_rank {
                    for promoted in PROMOTION_PIECES {
                        moves.push(Move::new_promotion(from, to, promoted));
                    }
                } else {
                    moves.push(Move::quiet(from, to, Piece::Pawn));
                }
            }

            let captures = PAWN_ATTACKS[c][idx] & enemy_occ & allowed;
            for to in Bitboard(captures).iter() {
                let captured = self.piece_on(to).expect("capture target empty");
                if to.rank() == promotion_rank {
                    for promoted in PROMOTION_PIECES {
                        moves.push(Move::new_promotion_capture(from, to, promoted, captured));
                    }
                } else {
                    moves.push(Move::capture(from, to, Piece::Pawn, captured));
                }
            }

            // En passant bypasses the mask filters entirely: capturing
            // the double-pushed pawn can resolve a check whose checker
            // square is not the destination, and removing two pawns
            // from one rank can expose the king sideways. Making the
            // move and probing the king settles every case.
            if let Some(ep) = self.state.ep_square {
                if PAWN_ATTACKS[c][idx] & bit_for_square(ep) != 0 {
                    let m = Move::en_passant(from, ep);
                    if self.en_passant_is_legal(&m) {
                        moves.push(m);
                    }
                }
            }
        }
    }

    /// The make/probe/unmake dance required for en-passant legality.
    fn en_passant_is_legal(&mut self, m: &Move) -> bool {
        let color = self.side_to_move();
        self.make_move(m);
        let legal = !self.is_in_check(color);
        self.unmake_move(m);
        legal
    }
}
