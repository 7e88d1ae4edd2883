use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::{
    BISHOP_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, ROOK_DIRECTIONS,
};

#[inline]
pub fn king_square(game_state: &GameState, color: Color) -> Option<Square> {
    game_state.king_square(color)
}

#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    let Some(king_sq) = king_square(game_state, color) else {
        return false;
    };
    is_square_attacked(game_state, king_sq, color.opposite())
}

/// Whether any piece of `attacker_color` attacks `square`. Scans per piece
/// shape rather than generating full moves, so it also works while probing
/// castling transit squares.
pub fn is_square_attacked(game_state: &GameState, square: Square, attacker_color: Color) -> bool {
    // Pawns attack diagonally forward, so look one rank back from the target.
    let pawn_dir = attacker_color.pawn_direction();
    for d_file in [-1i8, 1i8] {
        if let Some(from) = square.offset(d_file, -pawn_dir) {
            if game_state.piece_at(from) == Some(Piece::new(PieceKind::Pawn, attacker_color)) {
                return true;
            }
        }
    }

    for (d_file, d_rank) in KNIGHT_OFFSETS {
        if let Some(from) = square.offset(d_file, d_rank) {
            if game_state.piece_at(from) == Some(Piece::new(PieceKind::Knight, attacker_color)) {
                return true;
            }
        }
    }

    for (d_file, d_rank) in KING_OFFSETS {
        if let Some(from) = square.offset(d_file, d_rank) {
            if game_state.piece_at(from) == Some(Piece::new(PieceKind::King, attacker_color)) {
                return true;
            }
        }
    }

    if attacked_along(game_state, square, attacker_color, &BISHOP_DIRECTIONS, PieceKind::Bishop) {
        return true;
    }
    if attacked_along(game_state, square, attacker_color, &ROOK_DIRECTIONS, PieceKind::Rook) {
        return true;
    }

    false
}

fn attacked_along(
    game_state: &GameState,
    square: Square,
    attacker_color: Color,
    directions: &[(i8, i8)],
    slider: PieceKind,
) -> bool {
    for (d_file, d_rank) in directions {
        let mut current = square;
        while let Some(from) = current.offset(*d_file, *d_rank) {
            match game_state.piece_at(from) {
                None => current = from,
                Some(piece) => {
                    if piece.color == attacker_color
                        && (piece.kind == slider || piece.kind == PieceKind::Queen)
                    {
                        return true;
                    }
                    break;
                }
            }
        }
    }
    false
}
