use crate::game_state::chess_types::{Piece, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::{
    generate_sliding_moves, squares_with_piece, BISHOP_DIRECTIONS, ROOK_DIRECTIONS,
};
use crate::moves::move_descriptions::Move;

pub fn generate_queen_moves(game_state: &GameState, out: &mut Vec<Move>) {
    let piece = Piece::new(PieceKind::Queen, game_state.side_to_move);
    let queens: Vec<Square> = squares_with_piece(game_state, piece).collect();
    for from in queens {
        generate_sliding_moves(game_state, from, piece, &BISHOP_DIRECTIONS, out);
        generate_sliding_moves(game_state, from, piece, &ROOK_DIRECTIONS, out);
    }
}
