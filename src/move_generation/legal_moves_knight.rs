use crate::game_state::chess_types::{Piece, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::{
    generate_step_moves, squares_with_piece, KNIGHT_OFFSETS,
};
use crate::moves::move_descriptions::Move;

pub fn generate_knight_moves(game_state: &GameState, out: &mut Vec<Move>) {
    let piece = Piece::new(PieceKind::Knight, game_state.side_to_move);
    let knights: Vec<Square> = squares_with_piece(game_state, piece).collect();
    for from in knights {
        generate_step_moves(game_state, from, piece, &KNIGHT_OFFSETS, out);
    }
}

#[cfg(test)]
mod tests {
    use super::generate_knight_moves;
    use crate::game_state::game_state::GameState;

    #[test]
    fn knight_in_corner_has_two_moves() {
        let game =
            GameState::from_fen("4k3/8/8/8/8/8/8/N3K3 w - - 0 1").expect("FEN should parse");
        let mut out = Vec::new();
        generate_knight_moves(&game, &mut out);
        assert_eq!(out.len(), 2);
    }
}
