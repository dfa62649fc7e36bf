use serde::{Deserialize, Serialize};

use crate::{Priority, ProgressSnapshot, weakness};

const RECORDED_WEAKNESS_MIN_COUNT: u32 = 3;
const RAISE_MIN_RATING_GAIN: i32 = 200;
const RAISE_MIN_WIN_FRACTION: f32 = 0.7;

/// What a recommendation asks the learner to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "kebab-case")]
pub enum RecommendationKind {
    #[display("style-focused")]
    StyleFocused,
    #[display("tactics-training")]
    TacticsTraining,
    #[display("endgame-training")]
    EndgameTraining,
    #[display("opening-study")]
    OpeningStudy,
    #[display("weakness-drill")]
    WeaknessDrill,
    #[display("difficulty-adjustment")]
    DifficultyAdjustment,
    #[display("continue-training")]
    ContinueTraining,
}

/// An actionable training suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub estimated_sessions: u32,
    /// Opponent id to practice against, for style-focused recommendations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_style: Option<String>,
}

impl Recommendation {
    fn new(
        kind: RecommendationKind,
        title: &str,
        description: String,
        priority: Priority,
        estimated_sessions: u32,
    ) -> Self {
        Self {
            kind,
            title: title.to_owned(),
            description,
            priority,
            estimated_sessions,
            target_style: None,
        }
    }
}

fn style_focused(progress: &ProgressSnapshot) -> impl Iterator<Item = Recommendation> + '_ {
    weakness::low_adaptation(progress)
        .into_iter()
        .map(|(id, _)| Recommendation {
            target_style: Some(id.to_owned()),
            ..Recommendation::new(
                RecommendationKind::StyleFocused,
                "Practice against a weak style",
                format!("play more games against the {id} style"),
                Priority::High,
                5,
            )
        })
}

fn for_recorded_weaknesses(progress: &ProgressSnapshot) -> Vec<Recommendation> {
    let mut frequent = progress
        .weaknesses
        .iter()
        .filter(|w| w.count >= RECORDED_WEAKNESS_MIN_COUNT)
        .collect::<Vec<_>>();
    frequent.sort_by(|a, b| b.count.cmp(&a.count));

    frequent
        .into_iter()
        .map(|w| match w.kind.as_str() {
            "tactical" => Recommendation::new(
                RecommendationKind::TacticsTraining,
                "Sharpen tactics",
                "solve more tactical combinations".to_owned(),
                Priority::High,
                10,
            ),
            "endgame" => Recommendation::new(
                RecommendationKind::EndgameTraining,
                "Improve endgame technique",
                "practice fundamental endgames".to_owned(),
                Priority::Medium,
                8,
            ),
            "opening" => Recommendation::new(
                RecommendationKind::OpeningStudy,
                "Study your openings",
                "review the opening lines you play".to_owned(),
                Priority::Medium,
                6,
            ),
            kind => Recommendation::new(
                RecommendationKind::WeaknessDrill,
                "Drill a recurring weakness",
                format!("targeted exercises for recurring {kind} mistakes ({} times)", w.count),
                Priority::Medium,
                5,
            ),
        })
        .collect()
}

fn difficulty_adjustment(progress: &ProgressSnapshot) -> Option<Recommendation> {
    let change = progress.rating_change();
    if change < 0 {
        Some(Recommendation::new(
            RecommendationKind::DifficultyAdjustment,
            "Lower the difficulty",
            "the current level may be too high; try 100-200 points lower".to_owned(),
            Priority::Medium,
            3,
        ))
    } else if change > RAISE_MIN_RATING_GAIN && progress.win_fraction() > RAISE_MIN_WIN_FRACTION {
        Some(Recommendation::new(
            RecommendationKind::DifficultyAdjustment,
            "Raise the difficulty",
            "results are strong; try a stronger opponent".to_owned(),
            Priority::Low,
            0,
        ))
    } else {
        None
    }
}

fn continue_training() -> Recommendation {
    Recommendation::new(
        RecommendationKind::ContinueTraining,
        "Keep training",
        "keep playing at the current level to build up more history".to_owned(),
        Priority::Medium,
        3,
    )
}

/// Recommendations for `progress`, never empty.
///
/// Style-focused entries come first (weakest style first), then one per recorded
/// weakness seen at least three times (most frequent first), then a difficulty
/// adjustment. A generic "continue training" entry is returned when nothing else
/// applies.
#[must_use]
pub fn recommend(progress: &ProgressSnapshot) -> Vec<Recommendation> {
    let mut recommendations = style_focused(progress).collect::<Vec<_>>();
    recommendations.extend(for_recorded_weaknesses(progress));
    recommendations.extend(difficulty_adjustment(progress));
    if recommendations.is_empty() {
        recommendations.push(continue_training());
    }
    recommendations
}
