//! Bishop, rook and queen move generation.

use super::super::attack_tables::{bishop_attacks, queen_attacks, rook_attacks};
use super::super::types::{bit_for_square, Bitboard, MoveList, Piece};
use super::super::Board;

impl Board {
    pub(crate) fn generate_slider_moves(&mut self, piece: Piece, moves: &mut MoveList) {
        debug_assert!(matches!(piece, Piece::Bishop | Piece::Rook | Piece::Queen));

        let color = self.side_to_move();
        let own_occ = self.occupied_by(color).0;

        for from in self.pieces[color.index()][piece.index()].iter() {
            // The mover's own bit must not count as a blocker
            let occ = self.all_occupied.0 & !bit_for_square(from);
            let attacks = match piece {
                Piece::Bishop => bishop_attacks(from, occ),
                Piece::Rook => rook_attacks(from, occ),
                _ => queen_attacks(from, occ),
            };
            let targets = attacks & !own_occ & self.legal_targets_mask(color, from);
            for to in Bitboard(targets).iter() {
                moves.push(self.create_move(from, to, piece));
            }
        }
    }
}
