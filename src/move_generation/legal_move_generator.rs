//! Full legal move generation pipeline.
//!
//! Assembles piece-wise pseudo-legal moves, applies each candidate, and
//! discards any move that leaves the mover's own king attacked. The
//! simulate-and-discard filter is the single source of truth for legality;
//! there is no separate pinned-piece bookkeeping.

use crate::game_state::chess_types::Square;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::move_descriptions::Move;

/// Moves obeying piece movement rules, before king-safety filtering.
pub fn pseudo_legal_moves(game_state: &GameState) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);

    generate_pawn_moves(game_state, &mut out);
    generate_knight_moves(game_state, &mut out);
    generate_bishop_moves(game_state, &mut out);
    generate_rook_moves(game_state, &mut out);
    generate_queen_moves(game_state, &mut out);
    generate_king_moves(game_state, &mut out);

    out
}

/// Moves the side to move may actually play.
pub fn legal_moves(game_state: &GameState) -> Vec<Move> {
    let mover = game_state.side_to_move;
    pseudo_legal_moves(game_state)
        .into_iter()
        .filter(|mv| {
            let next = apply_move(game_state, mv);
            !is_king_in_check(&next, mover)
        })
        .collect()
}

/// Legal moves starting on one square, for selection highlighting.
pub fn legal_moves_from(game_state: &GameState, from: Square) -> Vec<Move> {
    legal_moves(game_state)
        .into_iter()
        .filter(|mv| mv.from == from)
        .collect()
}
