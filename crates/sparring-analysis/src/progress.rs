use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sparring_core::Rating;

/// Aggregated training history of one learner.
///
/// Produced incrementally by whatever records matches; the analyzer only reads it.
/// Adaptation scores are keyed by opponent id and nominally lie in 0..=100.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    pub games_played: u32,
    pub games_won: u32,
    pub games_drawn: u32,
    pub games_lost: u32,
    pub current_rating: Rating,
    pub starting_rating: Rating,
    #[serde(default)]
    pub style_adaptation: BTreeMap<String, f32>,
    #[serde(default)]
    pub weaknesses: Vec<WeaknessRecord>,
}

/// A weakness tracked explicitly by the match recorder, e.g. missed tactics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaknessRecord {
    #[serde(alias = "type")]
    pub kind: String,
    pub description: String,
    pub count: u32,
}

impl ProgressSnapshot {
    /// Signed rating change since the start of training.
    #[must_use]
    pub const fn rating_change(&self) -> Rating {
        self.current_rating.saturating_sub(self.starting_rating)
    }

    /// Fraction of games won, 0 when nothing was played.
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub fn win_fraction(&self) -> f32 {
        if self.games_played == 0 {
            return 0.0;
        }
        self.games_won.min(self.games_played) as f32 / self.games_played as f32
    }

    /// Adaptation scores clamped into 0..=100, in opponent id order.
    pub fn adaptation_scores(&self) -> impl Iterator<Item = (&str, f32)> {
        self.style_adaptation
            .iter()
            .map(|(id, &score)| (id.as_str(), clamp_score(id, score)))
    }
}

fn clamp_score(id: &str, score: f32) -> f32 {
    let clamped = if score.is_nan() {
        0.0
    } else {
        score.clamp(0.0, 100.0)
    };
    if clamped.to_bits() != score.to_bits() {
        log::debug!("adaptation score for {id} clamped from {score} to {clamped}");
    }
    clamped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_change_is_signed() {
        let progress = ProgressSnapshot {
            current_rating: 1400,
            starting_rating: 1500,
            ..ProgressSnapshot::default()
        };
        assert_eq!(progress.rating_change(), -100);
    }

    #[test]
    fn test_win_fraction_without_games() {
        assert_eq!(ProgressSnapshot::default().win_fraction(), 0.0);
    }

    #[test]
    fn test_adaptation_scores_are_clamped() {
        let progress = ProgressSnapshot {
            style_adaptation: BTreeMap::from([
                ("a".to_owned(), 140.0),
                ("b".to_owned(), -3.0),
                ("c".to_owned(), f32::NAN),
                ("d".to_owned(), 42.0),
            ]),
            ..ProgressSnapshot::default()
        };
        let scores = progress.adaptation_scores().collect::<Vec<_>>();
        assert_eq!(scores, [("a", 100.0), ("b", 0.0), ("c", 0.0), ("d", 42.0)]);
    }

    #[test]
    fn test_deserialize_minimal_snapshot() {
        let json = r#"{
            "games_played": 3, "games_won": 1, "games_drawn": 1, "games_lost": 1,
            "current_rating": 1210, "starting_rating": 1200,
            "weaknesses": [{"type": "tactical", "description": "missed forks", "count": 4}]
        }"#;
        let progress: ProgressSnapshot = serde_json::from_str(json).unwrap();
        assert!(progress.style_adaptation.is_empty());
        assert_eq!(progress.weaknesses[0].kind, "tactical");
    }
}
