//! FEN-to-GameState parser.
//!
//! Builds a fully-populated position from a Forsyth-Edwards Notation string,
//! including placement, rights, en-passant target, and clocks. Parsing is
//! all-or-nothing: any structural fault rejects the whole string.

use crate::errors::GameError;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> Result<GameState, GameError> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| malformed("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| malformed("missing side-to-move"))?;
    let castling_part = parts.next().ok_or_else(|| malformed("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| malformed("missing en-passant square"))?;
    let halfmove_part = parts.next().ok_or_else(|| malformed("missing halfmove clock"))?;
    let fullmove_part = parts.next().ok_or_else(|| malformed("missing fullmove number"))?;

    if parts.next().is_some() {
        return Err(malformed("extra trailing fields"));
    }

    let mut game_state = GameState::new_empty();

    parse_board(board_part, &mut game_state)?;
    game_state.side_to_move = parse_side_to_move(side_part)?;
    game_state.castling_rights = parse_castling_rights(castling_part)?;
    game_state.en_passant_target = parse_en_passant_square(en_passant_part)?;
    game_state.halfmove_clock = halfmove_part
        .parse::<u16>()
        .map_err(|_| malformed(&format!("invalid halfmove clock: {halfmove_part}")))?;
    game_state.fullmove_number = fullmove_part
        .parse::<u16>()
        .map_err(|_| malformed(&format!("invalid fullmove number: {fullmove_part}")))?;

    validate_kings(&game_state)?;

    Ok(game_state)
}

fn malformed(message: &str) -> GameError {
    GameError::MalformedPosition(message.to_owned())
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> Result<(), GameError> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(malformed("board layout must contain 8 ranks"));
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_idx as i8;
        let mut file = 0i8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(malformed(&format!("invalid empty-square count '{ch}'")));
                }
                file += empty_count as i8;
                continue;
            }

            let piece = piece_from_fen_char(ch)
                .ok_or_else(|| malformed(&format!("invalid piece character '{ch}'")))?;

            let square = Square::new(file, board_rank)
                .map_err(|_| malformed("board rank has too many files"))?;
            game_state.board[square.index()] = Some(piece);
            file += 1;
        }

        if file != 8 {
            return Err(malformed("board rank does not sum to 8 files"));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Color, GameError> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(malformed(&format!("invalid side-to-move field: {side_part}"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, GameError> {
    if castling_part == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;

    for ch in castling_part.chars() {
        match ch {
            'K' => rights |= CASTLE_WHITE_KINGSIDE,
            'Q' => rights |= CASTLE_WHITE_QUEENSIDE,
            'k' => rights |= CASTLE_BLACK_KINGSIDE,
            'q' => rights |= CASTLE_BLACK_QUEENSIDE,
            _ => return Err(malformed(&format!("invalid castling rights character: {ch}"))),
        }
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> Result<Option<Square>, GameError> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    algebraic_to_square(en_passant_part)
        .map(Some)
        .map_err(GameError::MalformedPosition)
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(kind, color))
}

fn validate_kings(game_state: &GameState) -> Result<(), GameError> {
    for color in [Color::White, Color::Black] {
        let kings = game_state
            .board
            .iter()
            .flatten()
            .filter(|piece| piece.kind == PieceKind::King && piece.color == color)
            .count();
        if kings != 1 {
            return Err(malformed(&format!("{color} must have exactly one king, found {kings}")));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::Color;

    #[test]
    fn parse_starting_fen() {
        let game_state = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        assert_eq!(game_state.side_to_move, Color::White);
        assert_eq!(game_state.fullmove_number, 1);
        assert_eq!(game_state.halfmove_clock, 0);
        assert_eq!(game_state.board.iter().flatten().count(), 32);
    }

    #[test]
    fn rejects_structural_faults() {
        // Wrong field count.
        assert!(parse_fen("8/8/8/8/8/8/8/8 w -").is_err());
        // Rank does not sum to 8 files.
        assert!(parse_fen("9/8/8/8/8/8/8/4K2k w - - 0 1").is_err());
        // Bad piece character.
        assert!(parse_fen("4x3/8/8/8/8/8/8/4K2k w - - 0 1").is_err());
        // Extra trailing field.
        assert!(parse_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1 extra").is_err());
    }

    #[test]
    fn rejects_wrong_king_counts() {
        // No black king.
        assert!(parse_fen("8/8/8/8/8/8/8/4K3 w - - 0 1").is_err());
        // Two white kings.
        assert!(parse_fen("4k3/8/8/8/8/8/8/2K1K3 w - - 0 1").is_err());
    }
}
