//! Legal chess move generation over bitboards.
//!
//! Provides the core a chess engine is built around:
//! - Bitboard board representation with a synchronized mailbox
//! - Hyperbola Quintessence sliding-piece attacks
//! - Legal move generation resolving checks, pins, castling and the
//!   en-passant discovered-check case
//! - Reversible make/unmake with an internal save stack
//! - FEN parsing/emission and UCI move resolution
//!
//! # Quick Start
//!
//! ```
//! use chess_movegen::board::Board;
//!
//! // Start from the initial position and walk a few moves
//! let mut board = Board::new();
//! let moves = board.generate_moves();
//! assert_eq!(moves.len(), 20);
//!
//! let e4 = board.parse_move("e2e4").unwrap();
//! board.make_move(&e4);
//! assert_eq!(board.en_passant_square().unwrap().to_string(), "e3");
//!
//! board.unmake_move(&e4);
//! assert_eq!(board.to_fen(), "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
//! ```
//!
//! # Arbitrary positions
//!
//! ```
//! use chess_movegen::board::Board;
//!
//! let mut board =
//!     Board::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
//! assert_eq!(board.generate_moves().len(), 48);
//! assert_eq!(board.perft(2), 2039);
//! ```
//!
//! # Features
//!
//! - `serde` - Enable serialization for `Piece`, `Color`, `Square`,
//!   `Move`, and `CastlingRights`

// Enable pedantic lints with sensible domain-specific exceptions
#![warn(clippy::pedantic)]
// Bitboard hex literals are clearer without separators (bit patterns visible)
#![allow(clippy::unreadable_literal)]
// Index casts are ubiquitous and safe in chess (board indices, square indices)
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
// Module-level documentation is sufficient for this codebase
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod board;
