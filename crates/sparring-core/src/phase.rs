use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::ParseError;

/// Stage of a chess game.
///
/// The phase drives per-phase adjustments of the engine tuning: the opening plays
/// faster and more combatively, the endgame searches deeper and is more willing to
/// accept a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GamePhase {
    Opening,
    Middlegame,
    Endgame,
}

/// Positions with at most this many pieces on the board (kings included) are endgames.
const ENDGAME_MAX_PIECES: usize = 10;

/// Positions up to this full-move number are openings.
const OPENING_MAX_FULLMOVE: u32 = 10;

impl GamePhase {
    pub const ALL: [Self; 3] = [Self::Opening, Self::Middlegame, Self::Endgame];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Opening => "opening",
            Self::Middlegame => "middlegame",
            Self::Endgame => "endgame",
        }
    }

    /// Classifies a position given in Forsyth-Edwards Notation.
    ///
    /// Only the piece placement and the full-move counter are inspected:
    ///
    /// 1. At most 10 pieces on the board: [`GamePhase::Endgame`]
    /// 2. Full-move number at most 10: [`GamePhase::Opening`]
    /// 3. Otherwise: [`GamePhase::Middlegame`]
    ///
    /// When the full-move field is absent, a position with at least 30 pieces is
    /// treated as an opening.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::MalformedFen`] if the piece placement is not eight ranks
    /// of eight squares, or the full-move field is present but not a number.
    ///
    /// # Example
    ///
    /// ```
    /// use sparring_core::GamePhase;
    ///
    /// let start = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
    /// assert_eq!(GamePhase::from_fen(start).unwrap(), GamePhase::Opening);
    ///
    /// let rook_ending = "8/5k2/8/8/3R4/8/2K5/6r1 w - - 0 57";
    /// assert_eq!(GamePhase::from_fen(rook_ending).unwrap(), GamePhase::Endgame);
    /// ```
    pub fn from_fen(fen: &str) -> Result<Self, ParseError> {
        let malformed = |reason| ParseError::MalformedFen {
            fen: fen.to_owned(),
            reason,
        };

        let mut fields = fen.split_whitespace();
        let placement = fields.next().ok_or_else(|| malformed("empty string"))?;
        let pieces = count_pieces(placement).map_err(malformed)?;
        let fullmove = match fields.nth(4) {
            Some(field) => Some(
                field
                    .parse::<u32>()
                    .map_err(|_| malformed("full-move number is not a number"))?,
            ),
            None => None,
        };

        let phase = if pieces <= ENDGAME_MAX_PIECES {
            Self::Endgame
        } else if fullmove.map_or(pieces >= 30, |n| n <= OPENING_MAX_FULLMOVE) {
            Self::Opening
        } else {
            Self::Middlegame
        };
        Ok(phase)
    }
}

fn count_pieces(placement: &str) -> Result<usize, &'static str> {
    let ranks = placement.split('/').collect::<Vec<_>>();
    if ranks.len() != 8 {
        return Err("piece placement must have 8 ranks");
    }
    let mut pieces = 0;
    for rank in ranks {
        let mut squares = 0;
        for ch in rank.chars() {
            match ch {
                '1'..='8' => squares += ch as usize - '0' as usize,
                'p' | 'n' | 'b' | 'r' | 'q' | 'k' | 'P' | 'N' | 'B' | 'R' | 'Q' | 'K' => {
                    squares += 1;
                    pieces += 1;
                }
                _ => return Err("unexpected character in piece placement"),
            }
        }
        if squares != 8 {
            return Err("rank does not describe 8 squares");
        }
    }
    Ok(pieces)
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GamePhase {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|phase| phase.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseError::UnknownPhase {
                value: s.to_owned(),
            })
    }
}
