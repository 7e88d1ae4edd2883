//! Core board state representation.
//!
//! `GameState` is the central model: piece placement, side to move, castling
//! rights, en-passant target, and move clocks. It is an immutable value in
//! practice; move application produces a fresh `GameState` so earlier
//! positions stay valid for undo and repetition checks.

use crate::errors::GameError;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::utils::fen_generator::{generate_fen, generate_repetition_key};
use crate::utils::fen_parser::parse_fen;

/// A complete chess position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Piece placement indexed by `Square::index()`.
    pub board: [Option<Piece>; 64],
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_target: Option<Square>,
    pub halfmove_clock: u16,
    pub fullmove_number: u16,
}

impl GameState {
    /// Empty board, used by the FEN parser before placement is filled in.
    #[inline]
    pub fn new_empty() -> Self {
        GameState {
            board: [None; 64],
            side_to_move: Color::White,
            castling_rights: 0,
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    #[inline]
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, GameError> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// Placement, side to move, castling rights, and en-passant target.
    /// Two states with equal keys are the same position for repetition
    /// purposes; the clocks are deliberately excluded.
    #[inline]
    pub fn repetition_key(&self) -> String {
        generate_repetition_key(self)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board[square.index()]
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        for index in 0u8..64 {
            let square = Square::from_index(index)?;
            if self.board[square.index()] == Some(Piece::new(PieceKind::King, color)) {
                return Some(square);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::game_state::chess_types::{Color, PieceKind, Square};

    #[test]
    fn new_game_round_trips_through_fen() {
        let game = GameState::new_game();
        assert_eq!(
            game.get_fen(),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
        );

        let fen = "r1bq1rk1/ppp2ppp/2n5/2bp4/4n3/1P2PNP1/PBP2PBP/RN1Q1RK1 b - - 2 9";
        let parsed = GameState::from_fen(fen).expect("FEN should parse");
        assert_eq!(parsed.get_fen(), fen);
    }

    #[test]
    fn piece_lookup_and_king_square() {
        let game = GameState::new_game();
        let e1 = Square::new(4, 0).expect("e1 should be on the board");
        let e4 = Square::new(4, 3).expect("e4 should be on the board");

        assert_eq!(game.piece_at(e1).map(|p| p.kind), Some(PieceKind::King));
        assert_eq!(game.piece_at(e4), None);
        assert_eq!(game.king_square(Color::White), Some(e1));
        assert_eq!(
            game.king_square(Color::Black).map(|s| s.to_string()),
            Some("e8".to_owned())
        );
    }

    #[test]
    fn repetition_key_ignores_clocks() {
        let a = GameState::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let b = GameState::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 40 31").expect("FEN should parse");
        assert_eq!(a.repetition_key(), b.repetition_key());
        assert_ne!(a.get_fen(), b.get_fen());
    }
}
