//! FEN parsing and emission, and UCI move resolution.

use std::str::FromStr;

use super::error::{FenError, MoveParseError};
use super::types::{CastlingRights, Color, Move, Piece, Square};
use super::Board;

impl Board {
    /// Parse a position from FEN notation.
    ///
    /// The placement, side, castling and en-passant fields are
    /// required; the halfmove and fullmove clocks default to 0 and 1
    /// when absent.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        // Piece placement, rank 8 down to rank 1, files a to h
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_idx;
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                } else {
                    let color = if c.is_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    if file >= 8 {
                        return Err(FenError::TooManyFiles {
                            rank: rank_idx,
                            files: file + 1,
                        });
                    }
                    board.set_piece(Square::new(rank, file), color, piece);
                    file += 1;
                }
            }
            if file > 8 {
                return Err(FenError::TooManyFiles {
                    rank: rank_idx,
                    files: file,
                });
            }
        }

        board.state.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let mut rights = CastlingRights::none();
        for c in parts[2].chars() {
            match c {
                'K' => rights.set(Color::White, true),
                'Q' => rights.set(Color::White, false),
                'k' => rights.set(Color::Black, true),
                'q' => rights.set(Color::Black, false),
                '-' => {}
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }
        board.state.castling_rights = rights;

        board.state.ep_square = if parts[3] == "-" {
            None
        } else {
            let sq = parts[3].parse().map_err(|_| FenError::InvalidEnPassant {
                found: parts[3].to_string(),
            })?;
            Some(sq)
        };

        if parts.len() >= 5 {
            board.state.halfmove_clock =
                parts[4].parse().map_err(|_| FenError::InvalidClock {
                    found: parts[4].to_string(),
                })?;
        }
        if parts.len() >= 6 {
            board.state.fullmove_number =
                parts[5].parse().map_err(|_| FenError::InvalidClock {
                    found: parts[5].to_string(),
                })?;
        }

        board.update_masks();
        Ok(board)
    }

    /// Parse a position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for
    /// fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Convert the position to FEN notation. Round-trips byte-for-byte
    /// through `try_from_fen` for every position this crate produces.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::new();
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                match self.piece_at(Square::new(rank, file)) {
                    Some((color, piece)) => {
                        if empty > 0 {
                            row.push_str(&empty.to_string());
                            empty = 0;
                        }
                        row.push(piece.to_fen_char(color));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = match self.state.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };

        let mut castling = String::new();
        if self.state.castling_rights.has(Color::White, true) {
            castling.push('K');
        }
        if self.state.castling_rights.has(Color::White, false) {
            castling.push('Q');
        }
        if self.state.castling_rights.has(Color::Black, true) {
            castling.push('k');
        }
        if self.state.castling_rights.has(Color::Black, false) {
            castling.push('q');
        }
        if castling.is_empty() {
            castling.push('-');
        }

        let ep = self
            .state
            .ep_square
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            castling,
            ep,
            self.state.halfmove_clock,
            self.state.fullmove_number
        )
    }

    /// Parse a move in UCI long algebraic notation (e.g. "e2e4",
    /// "e7e8q") and resolve it against the current legal move list.
    ///
    /// # Example
    /// ```
    /// use chess_movegen::board::Board;
    ///
    /// let mut board = Board::new();
    /// let mv = board.parse_move("e2e4").unwrap();
    /// assert_eq!(mv.to_string(), "e2e4");
    /// ```
    pub fn parse_move(&mut self, uci: &str) -> Result<Move, MoveParseError> {
        if uci.len() < 4 || uci.len() > 5 {
            return Err(MoveParseError::InvalidLength { len: uci.len() });
        }

        let invalid_square = || MoveParseError::InvalidSquare {
            notation: uci.to_string(),
        };
        let from: Square = uci
            .get(0..2)
            .and_then(|s| s.parse().ok())
            .ok_or_else(invalid_square)?;
        let to: Square = uci
            .get(2..4)
            .and_then(|s| s.parse().ok())
            .ok_or_else(invalid_square)?;

        let promotion = match uci.as_bytes().get(4) {
            Some(&c) => {
                let piece = Piece::from_char(c as char)
                    .ok_or(MoveParseError::InvalidPromotion { char: c as char })?;
                if matches!(piece, Piece::Pawn | Piece::King) {
                    return Err(MoveParseError::InvalidPromotion { char: c as char });
                }
                Some(piece)
            }
            None => None,
        };

        self.generate_moves()
            .into_iter()
            .find(|m| m.from() == from && m.to() == to && m.promotion() == promotion)
            .ok_or(MoveParseError::IllegalMove {
                notation: uci.to_string(),
            })
    }

    /// Parse a UCI move and make it on the board in one call.
    pub fn make_move_uci(&mut self, uci: &str) -> Result<Move, MoveParseError> {
        let mv = self.parse_move(uci)?;
        self.make_move(&mv);
        Ok(mv)
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}
