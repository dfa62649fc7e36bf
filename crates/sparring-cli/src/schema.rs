//! JSON documents written by the `sparring` subcommands.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sparring_adaptive::{AdaptiveState, RatingUpdate};
use sparring_core::{GamePhase, MatchOutcome, OpponentProfile, Rating, RatingRange};
use sparring_tuning::EngineConfig;

/// Wraps a document body with the time it was produced.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
    pub generated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub body: T,
}

impl<T> Envelope<T> {
    pub fn now(body: T) -> Self {
        Self {
            generated_at: Utc::now(),
            body,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileEntry<'a> {
    #[serde(flatten)]
    pub profile: &'a OpponentProfile,
    pub style_summary: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileList<'a> {
    pub profiles: Vec<ProfileEntry<'a>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Configuration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<String>,
    pub rating: Rating,
    pub phase: GamePhase,
    pub config: EngineConfig,
    pub commands: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OutcomeEvent {
    pub outcome: MatchOutcome,
    pub rating: Rating,
    pub update: RatingUpdate,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdaptResult {
    pub events: Vec<OutcomeEvent>,
    pub stability: f32,
    pub state: AdaptiveState,
}

#[derive(Debug, Clone, Serialize)]
pub struct SimulatedGame {
    pub game: usize,
    pub opponent_rating: Rating,
    pub skill_level: u8,
    pub expected_score: f32,
    pub outcome: MatchOutcome,
    pub update: RatingUpdate,
}

#[derive(Debug, Clone, Serialize)]
pub struct Simulation {
    pub profile_id: String,
    pub learner_rating: Rating,
    pub seed: u64,
    pub final_rating: Rating,
    pub adjustments: usize,
    pub record: String,
    pub stability: f32,
    pub optimal_range: RatingRange,
    pub games: Vec<SimulatedGame>,
}
