use serde::{Deserialize, Serialize};
use sparring_core::Rating;

use crate::{
    ProgressSnapshot, Recommendation, WeaknessList, recommendation::recommend,
    weakness::analyze_weaknesses,
};

const STRONG_ADAPTATION: f32 = 75.0;
const STRONG_WIN_FRACTION: f32 = 0.6;
const EXCELLENT_AVERAGE: f32 = 70.0;
const GOOD_AVERAGE: f32 = 50.0;

/// Urgency of a weakness or recommendation. Orders from most to least urgent.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    #[display("high")]
    High,
    #[display("medium")]
    Medium,
    #[display("low")]
    Low,
}

/// Headline numbers of a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_games: u32,
    /// `won-drawn-lost`
    pub record: String,
    /// Percentage of games won, one decimal.
    pub win_rate: f32,
    pub elo_change: Rating,
    pub current_rating: Rating,
    pub starting_rating: Rating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrengthKind {
    StyleAdaptation,
    OverallPerformance,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strength {
    #[serde(rename = "type")]
    pub kind: StrengthKind,
    pub description: String,
    pub score: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleScore {
    pub name: String,
    pub score: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Assessment {
    Excellent,
    Good,
    NeedsImprovement,
}

/// How well the learner copes with each opponent style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StylePerformance {
    pub best_style: StyleScore,
    pub worst_style: StyleScore,
    /// Mean adaptation score, rounded.
    pub average_adaptation: f32,
    pub assessment: Assessment,
}

/// Result of analyzing a [`ProgressSnapshot`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub summary: Summary,
    pub weaknesses: WeaknessList,
    pub strengths: Vec<Strength>,
    pub recommendations: Vec<Recommendation>,
    /// Absent when no adaptation scores were recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_performance: Option<StylePerformance>,
}

fn summarize(progress: &ProgressSnapshot) -> Summary {
    Summary {
        total_games: progress.games_played,
        record: format!(
            "{}-{}-{}",
            progress.games_won, progress.games_drawn, progress.games_lost
        ),
        win_rate: (progress.win_fraction() * 1000.0).round() / 10.0,
        elo_change: progress.rating_change(),
        current_rating: progress.current_rating,
        starting_rating: progress.starting_rating,
    }
}

fn strengths(progress: &ProgressSnapshot) -> Vec<Strength> {
    let mut strengths = progress
        .adaptation_scores()
        .filter(|&(_, score)| score >= STRONG_ADAPTATION)
        .map(|(id, score)| Strength {
            kind: StrengthKind::StyleAdaptation,
            description: format!("handles the {id} style well"),
            score,
        })
        .collect::<Vec<_>>();
    let win_fraction = progress.win_fraction();
    if win_fraction >= STRONG_WIN_FRACTION {
        strengths.push(Strength {
            kind: StrengthKind::OverallPerformance,
            description: "strong overall win rate".to_owned(),
            score: win_fraction * 100.0,
        });
    }
    strengths
}

#[expect(clippy::cast_precision_loss)]
fn style_performance(progress: &ProgressSnapshot) -> Option<StylePerformance> {
    let mut scores = progress.adaptation_scores();
    let first = scores.next()?;
    let (mut best, mut worst, mut sum, mut n) = (first, first, first.1, 1_usize);
    for entry in scores {
        if entry.1 > best.1 {
            best = entry;
        }
        if entry.1 < worst.1 {
            worst = entry;
        }
        sum += entry.1;
        n += 1;
    }
    let average = sum / n as f32;
    let assessment = if average >= EXCELLENT_AVERAGE {
        Assessment::Excellent
    } else if average >= GOOD_AVERAGE {
        Assessment::Good
    } else {
        Assessment::NeedsImprovement
    };
    let score = |(name, score): (&str, f32)| StyleScore {
        name: name.to_owned(),
        score,
    };
    Some(StylePerformance {
        best_style: score(best),
        worst_style: score(worst),
        average_adaptation: average.round(),
        assessment,
    })
}

/// Analyzes a learner's progress.
///
/// Pure: the same snapshot always yields the same report. A snapshot without games
/// yields a neutral summary, the "no notable weaknesses" marker and a single
/// "continue training" recommendation.
///
/// # Example
///
/// ```
/// use sparring_analysis::{ProgressSnapshot, RecommendationKind, generate_report};
///
/// let progress = ProgressSnapshot {
///     games_played: 10,
///     games_won: 4,
///     games_drawn: 2,
///     games_lost: 4,
///     current_rating: 1650,
///     starting_rating: 1500,
///     style_adaptation: [("A".to_owned(), 85.0), ("B".to_owned(), 35.0)].into(),
///     ..ProgressSnapshot::default()
/// };
/// let report = generate_report(&progress);
///
/// assert_eq!(report.summary.elo_change, 150);
/// assert_eq!(report.summary.record, "4-2-4");
/// let focused = report
///     .recommendations
///     .iter()
///     .filter(|r| r.kind == RecommendationKind::StyleFocused)
///     .collect::<Vec<_>>();
/// assert_eq!(focused.len(), 1);
/// assert_eq!(focused[0].target_style.as_deref(), Some("B"));
/// ```
#[must_use]
pub fn generate_report(progress: &ProgressSnapshot) -> Report {
    let report = Report {
        summary: summarize(progress),
        weaknesses: analyze_weaknesses(progress),
        strengths: strengths(progress),
        recommendations: recommend(progress),
        style_performance: style_performance(progress),
    };
    log::debug!(
        "report over {} games: {} weaknesses, {} recommendations",
        report.summary.total_games,
        report.weaknesses.as_slice().len(),
        report.recommendations.len()
    );
    report
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::RecommendationKind;

    fn snapshot() -> ProgressSnapshot {
        ProgressSnapshot {
            games_played: 10,
            games_won: 4,
            games_drawn: 2,
            games_lost: 4,
            current_rating: 1650,
            starting_rating: 1500,
            ..ProgressSnapshot::default()
        }
    }

    #[test]
    fn test_summary_totals() {
        let report = generate_report(&snapshot());
        assert_eq!(report.summary.elo_change, 150);
        assert_eq!(report.summary.total_games, 10);
        assert!((report.summary.win_rate - 40.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_exactly_one_style_focused_for_b() {
        let progress = ProgressSnapshot {
            style_adaptation: BTreeMap::from([("A".to_owned(), 85.0), ("B".to_owned(), 35.0)]),
            ..snapshot()
        };
        let report = generate_report(&progress);
        let focused = report
            .recommendations
            .iter()
            .filter(|r| r.kind == RecommendationKind::StyleFocused)
            .collect::<Vec<_>>();
        assert_eq!(focused.len(), 1);
        assert_eq!(focused[0].target_style.as_deref(), Some("B"));

        let weak = report.weaknesses.as_slice();
        assert_eq!(weak.len(), 1);
        assert!(weak[0].is_style_adaptation());
        assert_eq!(weak[0].priority, Priority::High);
    }

    #[test]
    fn test_zero_games_is_neutral() {
        let report = generate_report(&ProgressSnapshot::default());
        assert_eq!(report.summary.total_games, 0);
        assert_eq!(report.summary.elo_change, 0);
        assert_eq!(report.summary.win_rate, 0.0);
        assert_eq!(report.summary.record, "0-0-0");
        assert_eq!(report.weaknesses, WeaknessList::NoneFound);
        assert!(!report.recommendations.is_empty());
        assert!(report.strengths.is_empty());
        assert!(report.style_performance.is_none());
    }

    #[test]
    fn test_recommendations_never_empty_with_games() {
        for won in 0..=10 {
            for (current, starting) in [(1500, 1500), (1400, 1500), (1800, 1500)] {
                let progress = ProgressSnapshot {
                    games_won: won,
                    games_drawn: 0,
                    games_lost: 10 - won,
                    current_rating: current,
                    starting_rating: starting,
                    ..snapshot()
                };
                assert!(!generate_report(&progress).recommendations.is_empty());
            }
        }
    }

    #[test]
    fn test_strengths() {
        let progress = ProgressSnapshot {
            games_won: 7,
            games_lost: 1,
            style_adaptation: BTreeMap::from([("A".to_owned(), 80.0), ("B".to_owned(), 60.0)]),
            ..snapshot()
        };
        let kinds = generate_report(&progress)
            .strengths
            .iter()
            .map(|s| s.kind)
            .collect::<Vec<_>>();
        assert_eq!(
            kinds,
            [StrengthKind::StyleAdaptation, StrengthKind::OverallPerformance]
        );
    }

    #[test]
    fn test_style_performance() {
        let progress = ProgressSnapshot {
            style_adaptation: BTreeMap::from([
                ("A".to_owned(), 85.0),
                ("B".to_owned(), 35.0),
                ("C".to_owned(), 60.0),
            ]),
            ..snapshot()
        };
        let performance = generate_report(&progress).style_performance.unwrap();
        assert_eq!(performance.best_style.name, "A");
        assert_eq!(performance.worst_style.name, "B");
        assert_eq!(performance.average_adaptation, 60.0);
        assert_eq!(performance.assessment, Assessment::Good);
    }

    #[test]
    fn test_out_of_range_scores_are_clamped() {
        let progress = ProgressSnapshot {
            style_adaptation: BTreeMap::from([("A".to_owned(), -20.0)]),
            ..snapshot()
        };
        let report = generate_report(&progress);
        assert_eq!(report.weaknesses.as_slice()[0].description, "low adaptation to the A style (0%)");
        assert_eq!(report.style_performance.unwrap().worst_style.score, 0.0);
    }

    #[test]
    fn test_report_serialization_shape() {
        let value = serde_json::to_value(generate_report(&ProgressSnapshot::default())).unwrap();
        assert_eq!(value["weaknesses"]["status"], "none-found");
        assert_eq!(value["recommendations"][0]["type"], "continue-training");
        assert!(value.get("style_performance").is_none());
    }
}
