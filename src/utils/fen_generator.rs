//! GameState-to-FEN serializer.
//!
//! Writes the reversible position string consumed by `fen_parser`, plus the
//! clock-free prefix used as a repetition key.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;

pub fn generate_fen(game_state: &GameState) -> String {
    let mut out = generate_repetition_key(game_state);
    out.push(' ');
    out.push_str(&game_state.halfmove_clock.to_string());
    out.push(' ');
    out.push_str(&game_state.fullmove_number.to_string());
    out
}

/// First four FEN fields: placement, side to move, castling rights, and
/// en-passant target. Clocks are excluded so repeated positions compare equal.
pub fn generate_repetition_key(game_state: &GameState) -> String {
    let mut out = String::new();

    for rank in (0..8usize).rev() {
        let mut empty_run = 0u8;
        for file in 0..8usize {
            match game_state.board[rank * 8 + file] {
                Some(piece) => {
                    if empty_run > 0 {
                        out.push(char::from(b'0' + empty_run));
                        empty_run = 0;
                    }
                    out.push(piece_to_fen_char(piece));
                }
                None => empty_run += 1,
            }
        }
        if empty_run > 0 {
            out.push(char::from(b'0' + empty_run));
        }
        if rank > 0 {
            out.push('/');
        }
    }

    out.push(' ');
    out.push(match game_state.side_to_move {
        Color::White => 'w',
        Color::Black => 'b',
    });

    out.push(' ');
    if game_state.castling_rights == 0 {
        out.push('-');
    } else {
        if game_state.castling_rights & CASTLE_WHITE_KINGSIDE != 0 {
            out.push('K');
        }
        if game_state.castling_rights & CASTLE_WHITE_QUEENSIDE != 0 {
            out.push('Q');
        }
        if game_state.castling_rights & CASTLE_BLACK_KINGSIDE != 0 {
            out.push('k');
        }
        if game_state.castling_rights & CASTLE_BLACK_QUEENSIDE != 0 {
            out.push('q');
        }
    }

    out.push(' ');
    match game_state.en_passant_target {
        Some(square) => out.push_str(&square.to_string()),
        None => out.push('-'),
    }

    out
}

fn piece_to_fen_char(piece: Piece) -> char {
    let ch = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match piece.color {
        Color::White => ch.to_ascii_uppercase(),
        Color::Black => ch,
    }
}

#[cfg(test)]
mod tests {
    use crate::game_state::game_state::GameState;

    #[test]
    fn fen_round_trips_through_parser() {
        for fen in [
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "1r4k1/7p/3p1bp1/p1pP4/P1P1prP1/1N2R2P/1P1N1PK1/8 b - - 3 31",
            "8/bpp1k2p/p2pP1p1/P5q1/1P5N/8/6PP/5Q1K b - - 0 35",
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1",
        ] {
            let game = GameState::from_fen(fen).expect("FEN should parse");
            assert_eq!(game.get_fen(), fen);
        }
    }
}
