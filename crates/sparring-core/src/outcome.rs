use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::ParseError;

/// Result of a finished game, seen from the learner's side of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchOutcome {
    Win,
    Draw,
    Loss,
}

impl MatchOutcome {
    pub const ALL: [Self; 3] = [Self::Win, Self::Draw, Self::Loss];

    /// Game score: 1.0 for a win, 0.5 for a draw, 0.0 for a loss.
    #[must_use]
    pub const fn score(self) -> f32 {
        match self {
            Self::Win => 1.0,
            Self::Draw => 0.5,
            Self::Loss => 0.0,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Win => "win",
            Self::Draw => "draw",
            Self::Loss => "loss",
        }
    }
}

impl fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts `win`/`draw`/`loss` (any case) and the shorthands `w`/`d`/`l`, `1`/`=`/`0`.
impl FromStr for MatchOutcome {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "win" | "w" | "1" => Ok(Self::Win),
            "draw" | "d" | "=" => Ok(Self::Draw),
            "loss" | "l" | "0" => Ok(Self::Loss),
            _ => Err(ParseError::UnknownOutcome {
                value: s.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_shorthands() {
        assert_eq!("W".parse::<MatchOutcome>().unwrap(), MatchOutcome::Win);
        assert_eq!("=".parse::<MatchOutcome>().unwrap(), MatchOutcome::Draw);
        assert_eq!(" loss".parse::<MatchOutcome>().unwrap(), MatchOutcome::Loss);
        assert!("resign".parse::<MatchOutcome>().is_err());
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        for outcome in MatchOutcome::ALL {
            assert_eq!(outcome.to_string().parse::<MatchOutcome>().unwrap(), outcome);
        }
    }
}
