//! Ordered, reversible move log.
//!
//! Each accepted move appends one `HistoryEntry`; undo pops the tail. The
//! log also answers repetition-count queries, since it holds every position
//! the game has passed through.

use crate::errors::GameError;
use crate::game_state::chess_types::{CastlingRights, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::Move;

/// Snapshot of the fields a move overwrites, taken before it is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoInfo {
    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant_target: Option<Square>,
    pub prev_halfmove_clock: u16,
    pub prev_fullmove_number: u16,
}

impl UndoInfo {
    pub fn capture(state: &GameState) -> Self {
        UndoInfo {
            prev_castling_rights: state.castling_rights,
            prev_en_passant_target: state.en_passant_target,
            prev_halfmove_clock: state.halfmove_clock,
            prev_fullmove_number: state.fullmove_number,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub mv: Move,
    pub san: String,
    pub resulting_state: GameState,
    pub undo: UndoInfo,
}

/// Append-only log of played moves for one game.
#[derive(Debug, Clone)]
pub struct MoveHistory {
    base_key: String,
    entries: Vec<HistoryEntry>,
}

impl MoveHistory {
    /// A fresh log rooted at `initial`, which counts as the first occurrence
    /// of its position for repetition purposes.
    pub fn new(initial: &GameState) -> Self {
        MoveHistory {
            base_key: initial.repetition_key(),
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// Remove and return the most recent entry.
    pub fn undo(&mut self) -> Result<HistoryEntry, GameError> {
        self.entries.pop().ok_or(GameError::NoHistory)
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// How often the given repetition key has occurred so far, counting the
    /// root position.
    pub fn repetition_count(&self, key: &str) -> usize {
        let base = usize::from(self.base_key == key);
        base + self
            .entries
            .iter()
            .filter(|entry| entry.resulting_state.repetition_key() == key)
            .count()
    }

    /// Per-move rows for a caller's history pane, in playing order.
    pub fn rows(&self) -> Vec<HistoryRow> {
        self.entries.iter().map(HistoryRow::from_entry).collect()
    }

    /// Rows grouped by move number, White's move before Black's reply.
    pub fn as_move_pairs(&self) -> Vec<MovePair> {
        let mut pairs: Vec<MovePair> = Vec::with_capacity(self.entries.len().div_ceil(2));

        for (ply, entry) in self.entries.iter().enumerate() {
            let row = HistoryRow::from_entry(entry);
            if ply % 2 == 0 {
                pairs.push(MovePair {
                    number: ply / 2 + 1,
                    white: Some(row),
                    black: None,
                });
            } else if let Some(pair) = pairs.last_mut() {
                pair.black = Some(row);
            }
        }

        pairs
    }
}

/// One played move as a caller's history pane shows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    pub san: String,
    pub from: Square,
    pub to: Square,
    pub piece: PieceKind,
    pub captured: Option<PieceKind>,
    pub promotion: Option<PieceKind>,
}

impl HistoryRow {
    fn from_entry(entry: &HistoryEntry) -> Self {
        HistoryRow {
            san: entry.san.clone(),
            from: entry.mv.from,
            to: entry.mv.to,
            piece: entry.mv.moving_piece.kind,
            captured: entry.mv.captured_piece().map(|piece| piece.kind),
            promotion: entry.mv.promotion_kind(),
        }
    }

    /// Prose description, e.g. `Knight g1 → f3 (captures Pawn)`.
    pub fn summary(&self) -> String {
        let mut out = format!("{} {} → {}", self.piece.name(), self.from, self.to);
        if let Some(captured) = self.captured {
            out.push_str(&format!(" (captures {})", captured.name()));
        }
        if let Some(promotion) = self.promotion {
            out.push_str(&format!(" (promotes to {})", promotion.name()));
        }
        out
    }
}

/// A full move: White's move paired with Black's reply, if played yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovePair {
    pub number: usize,
    pub white: Option<HistoryRow>,
    pub black: Option<HistoryRow>,
}
