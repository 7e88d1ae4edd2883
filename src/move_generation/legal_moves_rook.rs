use crate::game_state::chess_types::{Piece, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::{
    generate_sliding_moves, squares_with_piece, ROOK_DIRECTIONS,
};
use crate::moves::move_descriptions::Move;

pub fn generate_rook_moves(game_state: &GameState, out: &mut Vec<Move>) {
    let piece = Piece::new(PieceKind::Rook, game_state.side_to_move);
    let rooks: Vec<Square> = squares_with_piece(game_state, piece).collect();
    for from in rooks {
        generate_sliding_moves(game_state, from, piece, &ROOK_DIRECTIONS, out);
    }
}
