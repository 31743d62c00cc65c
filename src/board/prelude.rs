//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_movegen::board::prelude::*;
//!
//! let mut board = Board::new();
//! assert_eq!(board.generate_moves().len(), 20);
//! ```

pub use super::{
    Board, CastlingRights, Color, FenError, Move, MoveList, MoveParseError, Piece, Square,
    SquareError,
};
