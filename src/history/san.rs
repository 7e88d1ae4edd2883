//! Standard Algebraic Notation rendering.
//!
//! Builds the SAN text for a move from the position it was played in and the
//! position it produced. Disambiguation follows the usual rules: source file
//! first, then rank, then both, and only when another like piece could
//! legally reach the same destination.

use crate::game_state::chess_types::PieceKind;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::moves::move_descriptions::{CastleSide, Move, MoveKind};

pub fn san_for_move(state_before: &GameState, mv: &Move, state_after: &GameState) -> String {
    let mut san = match mv.kind {
        MoveKind::Castle(CastleSide::KingSide) => "O-O".to_owned(),
        MoveKind::Castle(CastleSide::QueenSide) => "O-O-O".to_owned(),
        _ => {
            let mut out = String::new();

            if mv.moving_piece.kind == PieceKind::Pawn {
                // Pawn captures name the departure file instead of a letter.
                if mv.is_capture() {
                    out.push(char::from(b'a' + mv.from.file() as u8));
                }
            } else {
                out.push(mv.moving_piece.kind.san_letter());
                out.push_str(&disambiguation(state_before, mv));
            }

            if mv.is_capture() {
                out.push('x');
            }
            out.push_str(&mv.to.to_string());

            if let Some(promoted_to) = mv.promotion_kind() {
                out.push('=');
                out.push(promoted_to.san_letter());
            }

            out
        }
    };

    if is_king_in_check(state_after, state_after.side_to_move) {
        if legal_moves(state_after).is_empty() {
            san.push('#');
        } else {
            san.push('+');
        }
    }

    san
}

fn disambiguation(state_before: &GameState, mv: &Move) -> String {
    let rivals: Vec<_> = legal_moves(state_before)
        .into_iter()
        .filter(|other| {
            other.from != mv.from
                && other.to == mv.to
                && other.moving_piece == mv.moving_piece
        })
        .collect();

    if rivals.is_empty() {
        return String::new();
    }

    let file_char = char::from(b'a' + mv.from.file() as u8);
    let rank_char = char::from(b'1' + mv.from.rank() as u8);

    if rivals.iter().all(|other| other.from.file() != mv.from.file()) {
        file_char.to_string()
    } else if rivals.iter().all(|other| other.from.rank() != mv.from.rank()) {
        rank_char.to_string()
    } else {
        format!("{file_char}{rank_char}")
    }
}
