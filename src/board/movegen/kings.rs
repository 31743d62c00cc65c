//! King move generation, including castling.

use super::super::attack_tables::KING_ATTACKS;
use super::super::types::{bit_for_square, Bitboard, Color, Move, MoveList, Piece, Square};
use super::super::Board;

/// Castling geometry for one color and side: king home, rook home,
/// squares that must be empty, squares the king crosses (which must
/// not be attacked; the last one is the destination).
struct CastleLane {
    king_home: Square,
    rook_home: Square,
    must_be_empty: &'static [Square],
    king_path: [Square; 2],
}

const WHITE_KINGSIDE: CastleLane = CastleLane {
    king_home: Square::E1,
    rook_home: Square::H1,
    must_be_empty: &[Square::F1, Square::G1],
    king_path: [Square::F1, Square::G1],
};

const WHITE_QUEENSIDE: CastleLane = CastleLane {
    king_home: Square::E1,
    rook_home: Square::A1,
    must_be_empty: &[Square::D1, Square::C1, Square::B1],
    king_path: [Square::D1, Square::C1],
};

const BLACK_KINGSIDE: CastleLane = CastleLane {
    king_home: Square::E8,
    rook_home: Square::H8,
    must_be_empty: &[Square::F8, Square::G8],
    king_path: [Square::F8, Square::G8],
};

const BLACK_QUEENSIDE: CastleLane = CastleLane {
    king_home: Square::E8,
    rook_home: Square::A8,
    must_be_empty: &[Square::D8, Square::C8, Square::B8],
    king_path: [Square::D8, Square::C8],
};

impl Board {
    pub(crate) fn generate_king_moves(&mut self, moves: &mut MoveList) {
        let color = self.side_to_move();
        let enemy = color.opponent();
        let Some(from) = self.king_square(color) else {
            return;
        };

        // A king stepping along a checking ray would still be hit once
        // it vacates its square, so the attack probe pretends the king
        // is gone
        let occ_without_king = self.all_occupied.0 & !bit_for_square(from);
        let targets = KING_ATTACKS[from.index()] & !self.occupied_by(color).0;
        for to in Bitboard(targets).iter() {
            if !self.square_attacked_with_occupancy(to, enemy, occ_without_king) {
                moves.push(self.create_move(from, to, Piece::King));
            }
        }

        // No castling out of check
        if self.is_square_attacked(from, enemy) {
            return;
        }
        let lanes = match color {
            Color::White => [WHITE_KINGSIDE, WHITE_QUEENSIDE],
            Color::Black => [BLACK_KINGSIDE, BLACK_QUEENSIDE],
        };
        for (lane, kingside) in lanes.into_iter().zip([true, false]) {
            if self.castle_lane_open(&lane, color, kingside) {
                moves.push(Move::castle(lane.king_home, lane.king_path[1]));
            }
        }
    }

    fn castle_lane_open(&self, lane: &CastleLane, color: Color, kingside: bool) -> bool {
        if !self.state.castling_rights.has(color, kingside) {
            return false;
        }
        let Some(from) = self.king_square(color) else {
            return false;
        };
        if from != lane.king_home
            || self.piece_at(lane.rook_home) != Some((color, Piece::Rook))
        {
            return false;
        }
        if lane.must_be_empty.iter().any(|&sq| !self.is_empty_square(sq)) {
            return false;
        }
        let enemy = color.opponent();
        !lane
            .king_path
            .iter()
            .any(|&sq| self.is_square_attacked(sq, enemy))
    }
}
