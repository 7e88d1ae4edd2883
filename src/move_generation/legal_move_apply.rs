//! Move application.
//!
//! `apply_move` is pure: it builds the successor position and leaves the
//! input untouched, so callers can keep every prior state alive for undo and
//! repetition checks. It expects a move produced by the generator for the
//! same position; the session layer screens out everything else.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::{double_push_skipped_square, Move, MoveKind};

pub fn apply_move(game_state: &GameState, mv: &Move) -> GameState {
    let moving_color = mv.moving_piece.color;
    let mut next = game_state.clone();

    next.board[mv.from.index()] = None;

    match mv.kind {
        MoveKind::Normal | MoveKind::Capture(_) => {
            next.board[mv.to.index()] = Some(mv.moving_piece);
        }
        MoveKind::EnPassant { captured_square } => {
            next.board[captured_square.index()] = None;
            next.board[mv.to.index()] = Some(mv.moving_piece);
        }
        MoveKind::Castle(castle_side) => {
            next.board[mv.to.index()] = Some(mv.moving_piece);
            let (rook_from_file, rook_to_file) = castle_side.rook_files();
            let rank = mv.from.rank();
            if let (Ok(rook_from), Ok(rook_to)) = (
                Square::new(rook_from_file, rank),
                Square::new(rook_to_file, rank),
            ) {
                next.board[rook_to.index()] = next.board[rook_from.index()];
                next.board[rook_from.index()] = None;
            }
        }
        MoveKind::Promotion { promoted_to, .. } => {
            next.board[mv.to.index()] = Some(Piece::new(promoted_to, moving_color));
        }
    }

    update_castling_rights(&mut next, mv);

    // The en-passant window only opens on a double pawn push and closes on
    // any other move.
    next.en_passant_target = double_push_skipped_square(mv);

    // Update clocks.
    if mv.moving_piece.kind == PieceKind::Pawn || mv.is_capture() {
        next.halfmove_clock = 0;
    } else {
        next.halfmove_clock = next.halfmove_clock.saturating_add(1);
    }
    if moving_color == Color::Black {
        next.fullmove_number = next.fullmove_number.saturating_add(1);
    }

    next.side_to_move = moving_color.opposite();

    next
}

fn update_castling_rights(next: &mut GameState, mv: &Move) {
    if mv.moving_piece.kind == PieceKind::King {
        let cleared = match mv.moving_piece.color {
            Color::White => CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE,
            Color::Black => CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE,
        };
        next.castling_rights &= !cleared;
    }

    if mv.moving_piece.kind == PieceKind::Rook {
        clear_corner_right(next, mv.from);
    }

    // Capturing a rook on its original corner removes that right too.
    clear_corner_right(next, mv.to);
}

fn clear_corner_right(next: &mut GameState, square: Square) {
    let cleared = match (square.file(), square.rank()) {
        (0, 0) => CASTLE_WHITE_QUEENSIDE,
        (7, 0) => CASTLE_WHITE_KINGSIDE,
        (0, 7) => CASTLE_BLACK_QUEENSIDE,
        (7, 7) => CASTLE_BLACK_KINGSIDE,
        _ => return,
    };
    next.castling_rights &= !cleared;
}
