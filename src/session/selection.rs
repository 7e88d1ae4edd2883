//! Selection and highlight state.
//!
//! `SelectionState` is owned by the session and recomputed as gestures
//! arrive; nothing here is persisted. The highlight map is a pure function
//! of position plus selection, produced on demand for whatever layer draws
//! the board.

use std::collections::BTreeMap;

use crate::game_state::chess_types::Square;
use crate::game_state::game_state::GameState;

/// What a renderer should emphasize on one square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightKind {
    /// The currently selected piece.
    SelectedPiece,
    /// A quiet destination of the selected piece.
    MoveOption,
    /// A destination that captures.
    CaptureOption,
    /// Origin or destination of the move just played.
    LastMove,
    /// A right-click annotation.
    Mark,
}

/// Current selection plus right-click marks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub selected: Option<Square>,
    pub legal_destinations: Vec<Square>,
    pub marked_squares: Vec<Square>,
}

impl SelectionState {
    pub fn new() -> Self {
        SelectionState::default()
    }

    /// Drop the active selection, keeping right-click marks.
    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.legal_destinations.clear();
    }

    pub fn clear_all(&mut self) {
        self.clear_selection();
        self.marked_squares.clear();
    }

    /// Flip the mark on a square; marking is independent of move logic.
    pub fn toggle_mark(&mut self, square: Square) {
        if let Some(position) = self.marked_squares.iter().position(|&s| s == square) {
            self.marked_squares.remove(position);
        } else {
            self.marked_squares.push(square);
        }
    }

    pub fn is_marked(&self, square: Square) -> bool {
        self.marked_squares.contains(&square)
    }
}

/// Merge selection, destinations, last move, and marks into one per-square
/// view. Later layers win, matching how the original overlays stacked:
/// last move under move options under marks.
pub fn highlight_map(
    game_state: &GameState,
    selection: &SelectionState,
    last_move: Option<(Square, Square)>,
) -> BTreeMap<Square, HighlightKind> {
    let mut map = BTreeMap::new();

    if let Some((from, to)) = last_move {
        map.insert(from, HighlightKind::LastMove);
        map.insert(to, HighlightKind::LastMove);
    }

    if let Some(selected) = selection.selected {
        map.insert(selected, HighlightKind::SelectedPiece);
        for &destination in &selection.legal_destinations {
            let kind = if game_state.piece_at(destination).is_some() {
                HighlightKind::CaptureOption
            } else {
                HighlightKind::MoveOption
            };
            map.insert(destination, kind);
        }
    }

    for &marked in &selection.marked_squares {
        map.insert(marked, HighlightKind::Mark);
    }

    map
}

#[cfg(test)]
mod tests {
    use super::{highlight_map, HighlightKind, SelectionState};
    use crate::game_state::game_state::GameState;
    use crate::utils::algebraic::algebraic_to_square;

    fn square(text: &str) -> crate::game_state::chess_types::Square {
        algebraic_to_square(text).expect("test square should parse")
    }

    #[test]
    fn toggle_mark_flips() {
        let mut selection = SelectionState::new();
        let c6 = square("c6");
        selection.toggle_mark(c6);
        assert!(selection.is_marked(c6));
        selection.toggle_mark(c6);
        assert!(!selection.is_marked(c6));
    }

    #[test]
    fn capture_destinations_are_distinguished() {
        let game =
            GameState::from_fen("4k3/8/3p4/8/4N3/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let mut selection = SelectionState::new();
        selection.selected = Some(square("e4"));
        selection.legal_destinations = vec![square("d6"), square("c5")];

        let map = highlight_map(&game, &selection, None);
        assert_eq!(map.get(&square("e4")), Some(&HighlightKind::SelectedPiece));
        assert_eq!(map.get(&square("c5")), Some(&HighlightKind::MoveOption));
        assert_eq!(map.get(&square("d6")), Some(&HighlightKind::CaptureOption));
    }

    #[test]
    fn marks_overlay_everything_else() {
        let game = GameState::new_game();
        let mut selection = SelectionState::new();
        selection.toggle_mark(square("e4"));

        let map = highlight_map(&game, &selection, Some((square("e2"), square("e4"))));
        assert_eq!(map.get(&square("e2")), Some(&HighlightKind::LastMove));
        assert_eq!(map.get(&square("e4")), Some(&HighlightKind::Mark));
    }
}
