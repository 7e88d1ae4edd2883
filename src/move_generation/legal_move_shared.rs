use crate::game_state::chess_types::{Piece, Square};
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::{normal_or_capture, Move};

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Squares currently holding the given piece.
pub fn squares_with_piece(
    game_state: &GameState,
    piece: Piece,
) -> impl Iterator<Item = Square> + '_ {
    game_state
        .board
        .iter()
        .enumerate()
        .filter_map(move |(index, occupant)| {
            if *occupant == Some(piece) {
                Square::from_index(index as u8)
            } else {
                None
            }
        })
}

/// Single-step moves for knights and kings: land on empty or enemy squares.
pub fn generate_step_moves(
    game_state: &GameState,
    from: Square,
    moving_piece: Piece,
    offsets: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for (d_file, d_rank) in offsets {
        let Some(to) = from.offset(*d_file, *d_rank) else {
            continue;
        };
        match game_state.piece_at(to) {
            Some(occupant) if occupant.color == moving_piece.color => {}
            occupant => out.push(normal_or_capture(from, to, moving_piece, occupant)),
        }
    }
}

/// Sliding moves: walk each direction until the first occupied square,
/// capturing an enemy piece there and stopping either way.
pub fn generate_sliding_moves(
    game_state: &GameState,
    from: Square,
    moving_piece: Piece,
    directions: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for (d_file, d_rank) in directions {
        let mut current = from;
        while let Some(to) = current.offset(*d_file, *d_rank) {
            match game_state.piece_at(to) {
                None => {
                    out.push(normal_or_capture(from, to, moving_piece, None));
                    current = to;
                }
                Some(occupant) => {
                    if occupant.color != moving_piece.color {
                        out.push(normal_or_capture(from, to, moving_piece, Some(occupant)));
                    }
                    break;
                }
            }
        }
    }
}
