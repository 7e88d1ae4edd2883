//! Coordinate text conversions.
//!
//! Converts between human-readable coordinates (for example `e4`) and
//! `Square` values, plus the long-algebraic move text the terminal driver
//! accepts (`e2e4`, `e7e8q`).

use crate::game_state::chess_types::{PieceKind, Square};

/// Convert algebraic coordinates (for example: "e4") to a square.
pub fn algebraic_to_square(text: &str) -> Result<Square, String> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(format!("Invalid algebraic square: {text}"));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(format!("Invalid algebraic file: {}", file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(format!("Invalid algebraic rank: {}", rank as char));
    }

    Square::new((file - b'a') as i8, (rank - b'1') as i8)
        .map_err(|_| format!("Invalid algebraic square: {text}"))
}

/// Split long-algebraic move text (`e2e4`, `a7a8q`) into its parts.
pub fn parse_long_algebraic(text: &str) -> Result<(Square, Square, Option<PieceKind>), String> {
    let trimmed = text.trim();
    if trimmed.len() != 4 && trimmed.len() != 5 {
        return Err(format!("Invalid long algebraic move: {trimmed}"));
    }

    let from = algebraic_to_square(&trimmed[0..2])?;
    let to = algebraic_to_square(&trimmed[2..4])?;

    let promotion = match trimmed.as_bytes().get(4) {
        None => None,
        Some(ch) => Some(char_to_promotion(*ch as char)?),
    };

    Ok((from, to, promotion))
}

fn char_to_promotion(ch: char) -> Result<PieceKind, String> {
    match ch.to_ascii_lowercase() {
        'n' => Ok(PieceKind::Knight),
        'b' => Ok(PieceKind::Bishop),
        'r' => Ok(PieceKind::Rook),
        'q' => Ok(PieceKind::Queen),
        _ => Err(format!("Invalid promotion piece character: {ch}")),
    }
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_square, parse_long_algebraic};
    use crate::game_state::chess_types::PieceKind;

    #[test]
    fn round_trip_square_conversions() {
        assert_eq!(
            algebraic_to_square("a1").expect("a1 should parse").to_string(),
            "a1"
        );
        assert_eq!(
            algebraic_to_square("h8").expect("h8 should parse").index(),
            63
        );
        assert!(algebraic_to_square("i3").is_err());
        assert!(algebraic_to_square("a9").is_err());
        assert!(algebraic_to_square("e").is_err());
    }

    #[test]
    fn long_algebraic_splits_moves() {
        let (from, to, promotion) = parse_long_algebraic("e2e4").expect("e2e4 should parse");
        assert_eq!(from.to_string(), "e2");
        assert_eq!(to.to_string(), "e4");
        assert_eq!(promotion, None);

        let (_, _, promotion) = parse_long_algebraic("a7a8q").expect("a7a8q should parse");
        assert_eq!(promotion, Some(PieceKind::Queen));

        assert!(parse_long_algebraic("e2").is_err());
        assert!(parse_long_algebraic("a7a8x").is_err());
    }
}
