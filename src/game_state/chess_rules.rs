//! Canonical chess-rule constants.
//!
//! Static rule-related literals such as the standard starting position FEN
//! used to initialize and validate game state setup.

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Halfmove-clock threshold for the fifty-move rule (50 full moves).
pub const FIFTY_MOVE_RULE_HALFMOVES: u16 = 100;

/// Number of times a position must occur for a repetition draw.
pub const THREEFOLD_REPETITION_COUNT: usize = 3;
