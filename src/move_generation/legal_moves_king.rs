use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::{generate_step_moves, KING_OFFSETS};
use crate::moves::move_descriptions::{CastleSide, Move, MoveKind};

pub fn generate_king_moves(game_state: &GameState, out: &mut Vec<Move>) {
    let side = game_state.side_to_move;
    let piece = Piece::new(PieceKind::King, side);
    let Some(from) = game_state.king_square(side) else {
        return;
    };

    generate_step_moves(game_state, from, piece, &KING_OFFSETS, out);
    generate_castling_moves(game_state, out, from);
}

fn generate_castling_moves(game_state: &GameState, out: &mut Vec<Move>, king_from: Square) {
    let side = game_state.side_to_move;
    let enemy = side.opposite();

    if king_from.file() != 4 || king_from.rank() != side.home_rank() {
        return;
    }

    // Cannot castle out of check.
    if is_square_attacked(game_state, king_from, enemy) {
        return;
    }

    let (kingside_right, queenside_right) = match side {
        Color::White => (CASTLE_WHITE_KINGSIDE, CASTLE_WHITE_QUEENSIDE),
        Color::Black => (CASTLE_BLACK_KINGSIDE, CASTLE_BLACK_QUEENSIDE),
    };

    for (castle_side, right) in [
        (CastleSide::KingSide, kingside_right),
        (CastleSide::QueenSide, queenside_right),
    ] {
        if game_state.castling_rights & right == 0 {
            continue;
        }
        if let Some(mv) = castle_move(game_state, king_from, castle_side) {
            out.push(mv);
        }
    }
}

fn castle_move(game_state: &GameState, king_from: Square, castle_side: CastleSide) -> Option<Move> {
    let side = game_state.side_to_move;
    let enemy = side.opposite();
    let (rook_file, _) = castle_side.rook_files();
    let rook_square = Square::new(rook_file, side.home_rank()).ok()?;

    if game_state.piece_at(rook_square) != Some(Piece::new(PieceKind::Rook, side)) {
        return None;
    }

    let step: i8 = match castle_side {
        CastleSide::KingSide => 1,
        CastleSide::QueenSide => -1,
    };

    // Every square between king and rook must be empty.
    let mut file = king_from.file() + step;
    while file != rook_file {
        let between = Square::new(file, king_from.rank()).ok()?;
        if game_state.piece_at(between).is_some() {
            return None;
        }
        file += step;
    }

    // The king may not pass through or land on an attacked square.
    for d_file in [step, 2 * step] {
        let crossed = king_from.offset(d_file, 0)?;
        if is_square_attacked(game_state, crossed, enemy) {
            return None;
        }
    }

    Some(Move {
        from: king_from,
        to: king_from.offset(2 * step, 0)?,
        moving_piece: Piece::new(PieceKind::King, side),
        kind: MoveKind::Castle(castle_side),
    })
}

#[cfg(test)]
mod tests {
    use super::generate_king_moves;
    use crate::game_state::game_state::GameState;
    use crate::moves::move_descriptions::MoveKind;

    fn castle_count(fen: &str) -> usize {
        let game = GameState::from_fen(fen).expect("FEN should parse");
        let mut out = Vec::new();
        generate_king_moves(&game, &mut out);
        out.iter()
            .filter(|mv| matches!(mv.kind, MoveKind::Castle(_)))
            .count()
    }

    #[test]
    fn both_castles_available_on_open_home_rank() {
        assert_eq!(castle_count("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1"), 2);
        assert_eq!(castle_count("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1"), 2);
    }

    #[test]
    fn castling_requires_rights() {
        assert_eq!(castle_count("r3k2r/8/8/8/8/8/8/R3K2R w kq - 0 1"), 0);
        assert_eq!(castle_count("r3k2r/8/8/8/8/8/8/R3K2R w Q - 0 1"), 1);
    }

    #[test]
    fn castling_requires_empty_path() {
        // Bishop on f1 blocks the kingside path; knight on b1 blocks queenside.
        assert_eq!(castle_count("4k3/8/8/8/8/8/8/RN2KB1R w KQ - 0 1"), 0);
    }

    #[test]
    fn castling_blocked_through_attacked_square() {
        // Black rook on f8 covers f1, the white king's transit square.
        assert_eq!(castle_count("4kr2/8/8/8/8/8/8/4K2R w K - 0 1"), 0);
        // A rook covering g1 blocks the landing square as well.
        assert_eq!(castle_count("4k1r1/8/8/8/8/8/8/4K2R w K - 0 1"), 0);
        // An attacked b1 does not block queenside castling.
        assert_eq!(castle_count("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1"), 1);
    }

    #[test]
    fn cannot_castle_out_of_check() {
        assert_eq!(castle_count("4k3/8/8/8/8/8/4r3/R3K2R w KQ - 0 1"), 0);
    }
}
