use crate::game_state::chess_types::{Piece, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::{
    generate_sliding_moves, squares_with_piece, BISHOP_DIRECTIONS,
};
use crate::moves::move_descriptions::Move;

pub fn generate_bishop_moves(game_state: &GameState, out: &mut Vec<Move>) {
    let piece = Piece::new(PieceKind::Bishop, game_state.side_to_move);
    let bishops: Vec<Square> = squares_with_piece(game_state, piece).collect();
    for from in bishops {
        generate_sliding_moves(game_state, from, piece, &BISHOP_DIRECTIONS, out);
    }
}
