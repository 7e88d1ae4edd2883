//! Terminal-state classification.
//!
//! Decides whether a position is still playable or has ended in checkmate,
//! stalemate, or one of the draw conditions. Classification is recomputed
//! from the current position and history on every call, so undo can never
//! leave a stale verdict behind.

use crate::game_state::chess_rules::{FIFTY_MOVE_RULE_HALFMOVES, THREEFOLD_REPETITION_COUNT};
use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::history::move_history::MoveHistory;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::legal_moves;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawReason {
    ThreefoldRepetition,
    InsufficientMaterial,
    FiftyMoveRule,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Checkmate { winner: Color },
    Stalemate,
    Draw(DrawReason),
}

impl GameStatus {
    #[inline]
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }

    /// Result text for a caller's status pane.
    pub fn describe(self) -> String {
        match self {
            GameStatus::InProgress => "Game in progress".to_owned(),
            GameStatus::Checkmate { winner } => format!("Checkmate! {winner} wins!"),
            GameStatus::Stalemate => "Draw by stalemate".to_owned(),
            GameStatus::Draw(DrawReason::ThreefoldRepetition) => {
                "Draw by threefold repetition".to_owned()
            }
            GameStatus::Draw(DrawReason::InsufficientMaterial) => {
                "Draw by insufficient material".to_owned()
            }
            GameStatus::Draw(DrawReason::FiftyMoveRule) => "Draw by 50-move rule".to_owned(),
        }
    }
}

pub fn classify(game_state: &GameState, history: &MoveHistory) -> GameStatus {
    let side = game_state.side_to_move;

    if legal_moves(game_state).is_empty() {
        return if is_king_in_check(game_state, side) {
            GameStatus::Checkmate {
                winner: side.opposite(),
            }
        } else {
            GameStatus::Stalemate
        };
    }

    if history.repetition_count(&game_state.repetition_key()) >= THREEFOLD_REPETITION_COUNT {
        return GameStatus::Draw(DrawReason::ThreefoldRepetition);
    }

    if is_material_insufficient(game_state) {
        return GameStatus::Draw(DrawReason::InsufficientMaterial);
    }

    if game_state.halfmove_clock >= FIFTY_MOVE_RULE_HALFMOVES {
        return GameStatus::Draw(DrawReason::FiftyMoveRule);
    }

    GameStatus::InProgress
}

/// Neither side can force mate: bare kings, a lone minor piece, or one
/// bishop each with both bishops on the same square shade.
fn is_material_insufficient(game_state: &GameState) -> bool {
    let mut extras = Vec::new();

    for index in 0u8..64 {
        let Some(square) = Square::from_index(index) else {
            continue;
        };
        let Some(piece) = game_state.piece_at(square) else {
            continue;
        };
        match piece.kind {
            PieceKind::King => {}
            PieceKind::Knight | PieceKind::Bishop => extras.push((piece, square)),
            PieceKind::Pawn | PieceKind::Rook | PieceKind::Queen => return false,
        }
    }

    match extras.as_slice() {
        [] => true,
        [_] => true,
        [(a_piece, a_square), (b_piece, b_square)] => {
            a_piece.kind == PieceKind::Bishop
                && b_piece.kind == PieceKind::Bishop
                && a_piece.color != b_piece.color
                && a_square.is_dark() == b_square.is_dark()
        }
        _ => false,
    }
}
