//! Knight move generation.

use super::super::attack_tables::KNIGHT_ATTACKS;
use super::super::types::{Bitboard, MoveList, Piece};
use super::super::Board;

impl Board {
    pub(crate) fn generate_knight_moves(&mut self, moves: &mut MoveList) {
        let color = self.side_to_move();
        let own_occ = self.occupied_by(color).0;

        for from in self.pieces[color.index()][Piece::Knight.index()].iter() {
            let targets = KNIGHT_ATTACKS[from.index()]
                & !own_occ
                & self.legal_targets_mask(color, from);
            for to in Bitboard(targets).iter() {
                moves.push(self.create_move(from, to, Piece::Knight));
            }
        }
    }
}
