use crate::game_state::chess_types::{Piece, PieceKind, Square};

/// Which wing a castling move happens on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    /// Rook start and destination files for this wing.
    #[inline]
    pub const fn rook_files(self) -> (i8, i8) {
        match self {
            CastleSide::KingSide => (7, 5),
            CastleSide::QueenSide => (0, 3),
        }
    }
}

/// Closed set of move shapes. Every consumer has to handle all of them, and
/// each variant carries exactly the metadata needed to apply and undo it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Normal,
    Capture(Piece),
    EnPassant { captured_square: Square },
    Castle(CastleSide),
    Promotion { promoted_to: PieceKind, captured: Option<Piece> },
}

/// A single move, meaningful only for the position it was generated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub moving_piece: Piece,
    pub kind: MoveKind,
}

impl Move {
    pub fn captured_piece(&self) -> Option<Piece> {
        match self.kind {
            MoveKind::Normal | MoveKind::Castle(_) => None,
            MoveKind::Capture(piece) => Some(piece),
            MoveKind::EnPassant { .. } => Some(Piece::new(
                PieceKind::Pawn,
                self.moving_piece.color.opposite(),
            )),
            MoveKind::Promotion { captured, .. } => captured,
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured_piece().is_some()
    }

    #[inline]
    pub fn promotion_kind(&self) -> Option<PieceKind> {
        match self.kind {
            MoveKind::Promotion { promoted_to, .. } => Some(promoted_to),
            _ => None,
        }
    }

    /// A pawn advance of two ranks, which opens the en-passant window.
    #[inline]
    pub fn is_double_pawn_push(&self) -> bool {
        self.moving_piece.kind == PieceKind::Pawn && (self.to.rank() - self.from.rank()).abs() == 2
    }

    /// Long-algebraic text (`e2e4`, `a7a8q`) used by the terminal driver.
    pub fn to_long_algebraic(&self) -> String {
        let mut out = format!("{}{}", self.from, self.to);
        if let Some(promoted_to) = self.promotion_kind() {
            out.push(promoted_to.san_letter().to_ascii_lowercase());
        }
        out
    }
}

/// The square a double-pushed pawn skipped over, which becomes the
/// en-passant target for the reply.
#[inline]
pub fn double_push_skipped_square(mv: &Move) -> Option<Square> {
    if !mv.is_double_pawn_push() {
        return None;
    }
    mv.from.offset(0, mv.moving_piece.color.pawn_direction())
}

/// Convenience constructor for the common quiet-or-capture shape.
pub fn normal_or_capture(from: Square, to: Square, moving_piece: Piece, captured: Option<Piece>) -> Move {
    Move {
        from,
        to,
        moving_piece,
        kind: match captured {
            Some(piece) => MoveKind::Capture(piece),
            None => MoveKind::Normal,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{double_push_skipped_square, Move, MoveKind};
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

    fn square(text: &str) -> Square {
        crate::utils::algebraic::algebraic_to_square(text).expect("test square should parse")
    }

    #[test]
    fn double_push_detection() {
        let push = Move {
            from: square("e2"),
            to: square("e4"),
            moving_piece: Piece::new(PieceKind::Pawn, Color::White),
            kind: MoveKind::Normal,
        };
        assert!(push.is_double_pawn_push());
        assert_eq!(double_push_skipped_square(&push), Some(square("e3")));

        let single = Move {
            from: square("e2"),
            to: square("e3"),
            moving_piece: Piece::new(PieceKind::Pawn, Color::White),
            kind: MoveKind::Normal,
        };
        assert!(!single.is_double_pawn_push());
        assert_eq!(double_push_skipped_square(&single), None);
    }

    #[test]
    fn en_passant_always_captures_a_pawn() {
        let mv = Move {
            from: square("e5"),
            to: square("d6"),
            moving_piece: Piece::new(PieceKind::Pawn, Color::White),
            kind: MoveKind::EnPassant {
                captured_square: square("d5"),
            },
        };
        assert!(mv.is_capture());
        assert_eq!(
            mv.captured_piece(),
            Some(Piece::new(PieceKind::Pawn, Color::Black))
        );
    }

    #[test]
    fn long_algebraic_text() {
        let promo = Move {
            from: square("a7"),
            to: square("a8"),
            moving_piece: Piece::new(PieceKind::Pawn, Color::White),
            kind: MoveKind::Promotion {
                promoted_to: PieceKind::Queen,
                captured: None,
            },
        };
        assert_eq!(promo.to_long_algebraic(), "a7a8q");
    }
}
