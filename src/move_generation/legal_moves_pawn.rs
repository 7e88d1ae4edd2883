use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::squares_with_piece;
use crate::moves::move_descriptions::{normal_or_capture, Move, MoveKind};

pub fn generate_pawn_moves(game_state: &GameState, out: &mut Vec<Move>) {
    let side = game_state.side_to_move;
    let piece = Piece::new(PieceKind::Pawn, side);
    let dir = side.pawn_direction();
    let (start_rank, promotion_rank) = match side {
        Color::White => (1, 7),
        Color::Black => (6, 0),
    };

    let pawns: Vec<Square> = squares_with_piece(game_state, piece).collect();
    for from in pawns {
        // pushes
        if let Some(to) = from.offset(0, dir) {
            if game_state.piece_at(to).is_none() {
                if to.rank() == promotion_rank {
                    push_promotions(from, to, piece, None, out);
                } else {
                    out.push(normal_or_capture(from, to, piece, None));

                    if from.rank() == start_rank {
                        if let Some(two) = from.offset(0, 2 * dir) {
                            if game_state.piece_at(two).is_none() {
                                out.push(normal_or_capture(from, two, piece, None));
                            }
                        }
                    }
                }
            }
        }

        // captures and en-passant
        for d_file in [-1i8, 1i8] {
            let Some(to) = from.offset(d_file, dir) else {
                continue;
            };
            match game_state.piece_at(to) {
                Some(occupant) if occupant.color != side => {
                    if to.rank() == promotion_rank {
                        push_promotions(from, to, piece, Some(occupant), out);
                    } else {
                        out.push(normal_or_capture(from, to, piece, Some(occupant)));
                    }
                }
                None if game_state.en_passant_target == Some(to) => {
                    if let Some(captured_square) = to.offset(0, -dir) {
                        out.push(Move {
                            from,
                            to,
                            moving_piece: piece,
                            kind: MoveKind::EnPassant { captured_square },
                        });
                    }
                }
                _ => {}
            }
        }
    }
}

/// Promotion is mandatory on the last rank; all four replacement pieces are
/// offered.
fn push_promotions(
    from: Square,
    to: Square,
    moving_piece: Piece,
    captured: Option<Piece>,
    out: &mut Vec<Move>,
) {
    for promoted_to in [
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
    ] {
        out.push(Move {
            from,
            to,
            moving_piece,
            kind: MoveKind::Promotion {
                promoted_to,
                captured,
            },
        });
    }
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_moves;
    use crate::game_state::game_state::GameState;
    use crate::moves::move_descriptions::{Move, MoveKind};
    use crate::utils::algebraic::algebraic_to_square;

    fn pawn_moves(fen: &str) -> Vec<Move> {
        let game = GameState::from_fen(fen).expect("FEN should parse");
        let mut out = Vec::new();
        generate_pawn_moves(&game, &mut out);
        out
    }

    #[test]
    fn double_push_only_from_start_rank() {
        let from_start = pawn_moves("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1");
        assert_eq!(from_start.len(), 2);

        let advanced = pawn_moves("4k3/8/8/8/8/4P3/8/4K3 w - - 0 1");
        assert_eq!(advanced.len(), 1);
    }

    #[test]
    fn blocked_pawn_cannot_push() {
        let moves = pawn_moves("4k3/8/8/8/4p3/4P3/8/4K3 w - - 0 1");
        assert!(moves.is_empty());
    }

    #[test]
    fn en_passant_only_on_matching_target() {
        let with_target = pawn_moves("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1");
        assert!(with_target
            .iter()
            .any(|mv| matches!(mv.kind, MoveKind::EnPassant { .. })));

        let without_target = pawn_moves("4k3/8/8/3pP3/8/8/8/4K3 w - - 0 1");
        assert!(!without_target
            .iter()
            .any(|mv| matches!(mv.kind, MoveKind::EnPassant { .. })));
    }

    #[test]
    fn promotion_emits_all_four_pieces() {
        let moves = pawn_moves("4k3/P7/8/8/8/8/8/4K3 w - - 0 1");
        let a8 = algebraic_to_square("a8").expect("a8 should parse");
        let promotions: Vec<_> = moves.iter().filter(|mv| mv.to == a8).collect();
        assert_eq!(promotions.len(), 4);
        assert!(promotions
            .iter()
            .all(|mv| matches!(mv.kind, MoveKind::Promotion { .. })));
    }
}
