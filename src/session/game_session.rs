//! Gesture-to-move state machine.
//!
//! `GameSession` is the only surface a board renderer talks to. It owns one
//! position, its history, and the selection state, and turns raw gestures
//! (click, drag-drop, right-click) into validated moves. Everything runs
//! synchronously; each call finishes before the next is accepted, and a
//! rejected gesture leaves all state exactly as it was.

use std::collections::BTreeMap;

use tracing::debug;

use crate::errors::GameError;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::game_status::game_status::{classify, GameStatus};
use crate::history::move_history::{HistoryEntry, HistoryRow, MoveHistory, MovePair, UndoInfo};
use crate::history::san::san_for_move;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::legal_moves_from;
use crate::moves::move_descriptions::Move;
use crate::session::selection::{highlight_map, HighlightKind, SelectionState};

/// What a gesture did, for the caller to re-render from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GestureOutcome {
    /// A piece is now selected with these destinations.
    Selected {
        square: Square,
        destinations: Vec<Square>,
    },
    /// The selection was dropped.
    Cleared,
    /// Nothing changed.
    Ignored,
    /// A move was applied.
    Moved { san: String, status: GameStatus },
}

/// One interactive game: current position, history, and selection.
#[derive(Debug, Clone)]
pub struct GameSession {
    initial_state: GameState,
    current: GameState,
    history: MoveHistory,
    selection: SelectionState,
    last_move: Option<(Square, Square)>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    pub fn new() -> Self {
        let initial = GameState::new_game();
        GameSession {
            current: initial.clone(),
            history: MoveHistory::new(&initial),
            selection: SelectionState::new(),
            last_move: None,
            initial_state: initial,
        }
    }

    // --- queries ---

    pub fn board(&self) -> &[Option<Piece>; 64] {
        &self.current.board
    }

    /// Read-only view of the whole current position.
    pub fn state(&self) -> &GameState {
        &self.current
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.current.piece_at(square)
    }

    pub fn side_to_move(&self) -> Color {
        self.current.side_to_move
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn last_move(&self) -> Option<(Square, Square)> {
        self.last_move
    }

    /// Always recomputed from the current position and history, never cached
    /// across undo.
    pub fn status(&self) -> GameStatus {
        classify(&self.current, &self.history)
    }

    pub fn history_view(&self) -> Vec<HistoryRow> {
        self.history.rows()
    }

    pub fn move_pairs(&self) -> Vec<MovePair> {
        self.history.as_move_pairs()
    }

    pub fn highlights(&self) -> BTreeMap<Square, HighlightKind> {
        highlight_map(&self.current, &self.selection, self.last_move)
    }

    pub fn export_position(&self) -> String {
        self.current.get_fen()
    }

    // --- gestures ---

    /// Left-click on a square: select, reselect, move, or clear.
    pub fn select_square(&mut self, square: Square) -> Result<GestureOutcome, GameError> {
        self.select_square_with_promotion(square, None)
    }

    /// Like `select_square`, with an explicit promotion choice for clicks
    /// that complete a promoting move. Defaults to the queen.
    pub fn select_square_with_promotion(
        &mut self,
        square: Square,
        promotion: Option<PieceKind>,
    ) -> Result<GestureOutcome, GameError> {
        if self.status().is_terminal() {
            return Ok(GestureOutcome::Ignored);
        }

        // A left click always wipes right-click marks.
        self.selection.marked_squares.clear();

        if let Some(from) = self.selection.selected {
            if self.selection.legal_destinations.contains(&square) {
                let mv = self.find_move(from, square, promotion)?;
                return self.commit_move(mv);
            }
        }

        match self.current.piece_at(square) {
            Some(piece) if piece.color == self.current.side_to_move => {
                let destinations: Vec<Square> = legal_moves_from(&self.current, square)
                    .iter()
                    .map(|mv| mv.to)
                    .collect();
                debug!(square = %square, options = destinations.len(), "piece selected");
                self.selection.selected = Some(square);
                self.selection.legal_destinations = destinations.clone();
                Ok(GestureOutcome::Selected {
                    square,
                    destinations,
                })
            }
            _ => {
                if self.selection.selected.is_some() {
                    self.selection.clear_selection();
                    Ok(GestureOutcome::Cleared)
                } else {
                    Ok(GestureOutcome::Ignored)
                }
            }
        }
    }

    /// Destinations to preview while a drag is in flight. Never commits
    /// selection state.
    pub fn preview_destinations(&self, from: Square) -> Vec<Square> {
        if self.status().is_terminal() {
            return Vec::new();
        }
        match self.current.piece_at(from) {
            Some(piece) if piece.color == self.current.side_to_move => {
                legal_moves_from(&self.current, from)
                    .iter()
                    .map(|mv| mv.to)
                    .collect()
            }
            _ => Vec::new(),
        }
    }

    /// Drag-drop: apply the matching move or reject it. An illegal drop
    /// leaves the session in the idle state rather than keeping a selection.
    pub fn drop_piece(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<GestureOutcome, GameError> {
        if self.status().is_terminal() {
            return Err(GameError::InvalidMove { from, to });
        }

        self.selection.clear_selection();

        let mv = self.find_move(from, to, promotion)?;
        self.commit_move(mv)
    }

    /// Right-click: toggle an annotation mark. Independent of selection and
    /// never consumed by move logic.
    pub fn right_click_square(&mut self, square: Square) {
        self.selection.toggle_mark(square);
    }

    /// Take back the last move. Always available, also after the game ended.
    pub fn undo(&mut self) -> Result<(), GameError> {
        let undone = self.history.undo()?;
        debug!(san = %undone.san, "move undone");

        self.current = match self.history.entries().last() {
            Some(entry) => entry.resulting_state.clone(),
            None => self.initial_state.clone(),
        };
        self.selection.clear_selection();
        self.last_move = None;
        Ok(())
    }

    /// Start over from the standard initial position.
    pub fn reset(&mut self) {
        debug!("session reset");
        self.initial_state = GameState::new_game();
        self.current = self.initial_state.clone();
        self.history = MoveHistory::new(&self.initial_state);
        self.selection.clear_all();
        self.last_move = None;
    }

    /// Replace the game with an imported position. Validation happens before
    /// any state is touched, so a bad string changes nothing.
    pub fn import_position(&mut self, fen: &str) -> Result<(), GameError> {
        let imported = GameState::from_fen(fen)?;
        debug!(fen, "position imported");

        self.initial_state = imported.clone();
        self.current = imported;
        self.history = MoveHistory::new(&self.initial_state);
        self.selection.clear_all();
        self.last_move = None;
        Ok(())
    }

    // --- internals ---

    fn find_move(
        &self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<Move, GameError> {
        let wanted = promotion.unwrap_or(PieceKind::Queen);

        legal_moves_from(&self.current, from)
            .into_iter()
            .find(|mv| {
                mv.to == to
                    && match mv.promotion_kind() {
                        None => true,
                        Some(kind) => kind == wanted,
                    }
            })
            .ok_or(GameError::InvalidMove { from, to })
    }

    fn commit_move(&mut self, mv: Move) -> Result<GestureOutcome, GameError> {
        let undo = UndoInfo::capture(&self.current);
        let next = apply_move(&self.current, &mv);
        let san = san_for_move(&self.current, &mv, &next);
        debug!(san = %san, lan = %mv.to_long_algebraic(), "move applied");

        self.history.push(HistoryEntry {
            mv,
            san: san.clone(),
            resulting_state: next.clone(),
            undo,
        });
        self.last_move = Some((mv.from, mv.to));
        self.current = next;
        self.selection.clear_selection();

        Ok(GestureOutcome::Moved {
            san,
            status: self.status(),
        })
    }
}
