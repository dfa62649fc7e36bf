use std::fmt;

use serde::{Deserialize, Serialize};
use sparring_core::{MatchOutcome, Rating};

use crate::{AdaptiveSettings, OutcomeWindow, SettingsError};

/// Lifecycle of a training session's rating controller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ControllerPhase {
    /// No outcome recorded in this session yet.
    #[default]
    Idle,
    /// Collecting outcomes until the window gives a clear signal.
    Accumulating,
    /// Applying an adjustment. Transient: recording an outcome never leaves the
    /// controller in this phase.
    Adjusting,
}

impl fmt::Display for ControllerPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Idle => "idle",
            Self::Accumulating => "accumulating",
            Self::Adjusting => "adjusting",
        };
        f.write_str(s)
    }
}

/// Direction of a rating adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// The learner is winning: make the opponent stronger.
    Up,
    /// The learner is losing: make the opponent weaker.
    Down,
}

impl Direction {
    #[must_use]
    pub const fn sign(self) -> Rating {
        match self {
            Self::Up => 1,
            Self::Down => -1,
        }
    }

    /// Whether `outcome` is evidence against moving in this direction.
    #[must_use]
    pub const fn is_opposed_by(self, outcome: MatchOutcome) -> bool {
        matches!(
            (self, outcome),
            (Self::Up, MatchOutcome::Loss) | (Self::Down, MatchOutcome::Win)
        )
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Up => "up",
            Self::Down => "down",
        })
    }
}

/// What recording one outcome did to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum RatingUpdate {
    /// Not enough evidence yet; the rating is unchanged.
    Accumulating { games: usize },
    /// The draw ratio crossed its threshold; the rating holds.
    Held { draw_ratio: f32 },
    /// A threshold was crossed but the window was too mixed to act on.
    Suppressed {
        direction: Direction,
        consistency: f32,
    },
    /// The rating moved by one bounded delta (possibly less at a bound).
    Adjusted {
        from: Rating,
        to: Rating,
        direction: Direction,
    },
}

impl RatingUpdate {
    #[must_use]
    pub const fn is_adjusted(&self) -> bool {
        matches!(self, Self::Adjusted { .. })
    }
}

/// Persistable state of one session's adaptive controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdaptiveState {
    pub settings: AdaptiveSettings,
    pub current_rating: Rating,
    #[serde(default)]
    pub phase: ControllerPhase,
    pub window: OutcomeWindow,
}

impl AdaptiveState {
    /// A fresh session state starting from the base rating.
    #[must_use]
    pub fn new(settings: AdaptiveSettings) -> Self {
        Self {
            current_rating: settings.rating_range().clamp(settings.base_rating),
            phase: ControllerPhase::Idle,
            window: OutcomeWindow::new(settings.window_capacity),
            settings,
        }
    }
}

/// Adjusts the opponent rating from a session's stream of match outcomes.
///
/// The controller owns its [`AdaptiveState`]; callers serialize writes per session and
/// persist the state between calls with [`state`](Self::state) /
/// [`from_state`](Self::from_state).
///
/// # Example
///
/// ```
/// use sparring_adaptive::{AdaptiveController, AdaptiveSettings, RatingUpdate};
/// use sparring_core::MatchOutcome;
///
/// let mut controller = AdaptiveController::new(AdaptiveSettings::default())?;
/// controller.record_outcome(MatchOutcome::Loss);
/// controller.record_outcome(MatchOutcome::Loss);
/// let update = controller.record_outcome(MatchOutcome::Loss);
///
/// assert!(update.is_adjusted());
/// assert_eq!(controller.rating(), 1170);
/// # Ok::<(), sparring_adaptive::SettingsError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AdaptiveController {
    state: AdaptiveState,
}

impl AdaptiveController {
    /// Starts a controller at the settings' base rating.
    pub fn new(settings: AdaptiveSettings) -> Result<Self, SettingsError> {
        settings.validate()?;
        Ok(Self {
            state: AdaptiveState::new(settings),
        })
    }

    /// Resumes a controller from persisted state.
    ///
    /// The rating is clamped into the settings' bounds, and the window is trimmed to
    /// the configured capacity, keeping the newest outcomes.
    pub fn from_state(mut state: AdaptiveState) -> Result<Self, SettingsError> {
        state.settings.validate()?;
        state.current_rating = state.settings.rating_range().clamp(state.current_rating);
        if state.window.capacity() != state.settings.window_capacity {
            let mut window = OutcomeWindow::new(state.settings.window_capacity);
            for outcome in state.window.iter() {
                window.push(outcome);
            }
            state.window = window;
        }
        if state.phase == ControllerPhase::Adjusting {
            state.phase = ControllerPhase::Accumulating;
        }
        Ok(Self { state })
    }

    #[must_use]
    pub fn state(&self) -> &AdaptiveState {
        &self.state
    }

    #[must_use]
    pub fn into_state(self) -> AdaptiveState {
        self.state
    }

    #[must_use]
    pub fn settings(&self) -> &AdaptiveSettings {
        &self.state.settings
    }

    #[must_use]
    pub fn rating(&self) -> Rating {
        self.state.current_rating
    }

    #[must_use]
    pub fn phase(&self) -> ControllerPhase {
        self.state.phase
    }

    #[must_use]
    pub fn window(&self) -> &OutcomeWindow {
        &self.state.window
    }

    /// Records a finished game and adjusts the rating if the window warrants it.
    pub fn record_outcome(&mut self, outcome: MatchOutcome) -> RatingUpdate {
        if self.state.phase == ControllerPhase::Idle {
            self.transition(ControllerPhase::Accumulating);
        }
        self.state.window.push(outcome);

        let update = self.evaluate();
        match update {
            RatingUpdate::Accumulating { games } => {
                log::debug!("recorded {outcome}, accumulating ({games} games)");
            }
            RatingUpdate::Held { draw_ratio } => {
                log::debug!("recorded {outcome}, holding at draw ratio {draw_ratio:.2}");
            }
            RatingUpdate::Suppressed {
                direction,
                consistency,
            } => {
                log::debug!(
                    "recorded {outcome}, suppressed {direction} adjustment (consistency {consistency:.2})"
                );
            }
            RatingUpdate::Adjusted { .. } => {}
        }
        update
    }

    /// Ends the session: clears the window and returns to idle, keeping the rating.
    pub fn reset_session(&mut self) {
        self.state.window.clear();
        self.transition(ControllerPhase::Idle);
    }

    fn evaluate(&mut self) -> RatingUpdate {
        let settings = self.state.settings;
        let window = &self.state.window;
        if window.len() < settings.min_games_for_adjustment {
            return RatingUpdate::Accumulating {
                games: window.len(),
            };
        }

        let draw_ratio = window.ratio(MatchOutcome::Draw);
        if draw_ratio >= settings.draw_threshold {
            return RatingUpdate::Held { draw_ratio };
        }

        let direction = if window.ratio(MatchOutcome::Win) >= settings.win_threshold {
            Direction::Up
        } else if window.ratio(MatchOutcome::Loss) >= settings.loss_threshold {
            Direction::Down
        } else {
            return RatingUpdate::Accumulating {
                games: window.len(),
            };
        };

        let consistency = window.consistency(direction);
        if consistency < settings.consistency_threshold {
            return RatingUpdate::Suppressed {
                direction,
                consistency,
            };
        }

        self.adjust(direction)
    }

    fn adjust(&mut self, direction: Direction) -> RatingUpdate {
        self.transition(ControllerPhase::Adjusting);
        let settings = self.state.settings;
        let from = self.state.current_rating;
        let to = settings
            .rating_range()
            .clamp(from.saturating_add(direction.sign() * settings.delta()));
        self.state.current_rating = to;
        self.state.window.clear();
        log::info!("adjusted opponent rating {direction}: {from} -> {to}");
        self.transition(ControllerPhase::Accumulating);
        RatingUpdate::Adjusted {
            from,
            to,
            direction,
        }
    }

    fn transition(&mut self, to: ControllerPhase) {
        log::debug!("controller {} -> {to}", self.state.phase);
        self.state.phase = to;
    }
}

#[cfg(test)]
mod tests {
    use sparring_core::MatchOutcome::{Draw, Loss, Win};

    use super::*;

    fn controller() -> AdaptiveController {
        AdaptiveController::new(AdaptiveSettings::default()).unwrap()
    }

    fn record_all(
        controller: &mut AdaptiveController,
        outcomes: &[MatchOutcome],
    ) -> Vec<RatingUpdate> {
        outcomes
            .iter()
            .map(|&outcome| controller.record_outcome(outcome))
            .collect()
    }

    #[test]
    fn test_idle_until_first_outcome() {
        let mut controller = controller();
        assert_eq!(controller.phase(), ControllerPhase::Idle);
        assert_eq!(controller.rating(), 1200);
        let update = controller.record_outcome(Win);
        assert_eq!(update, RatingUpdate::Accumulating { games: 1 });
        assert_eq!(controller.phase(), ControllerPhase::Accumulating);
    }

    #[test]
    fn test_consecutive_losses_drop_one_delta() {
        let mut controller = controller();
        let updates = record_all(&mut controller, &[Loss, Loss, Loss]);
        assert_eq!(
            updates[2],
            RatingUpdate::Adjusted {
                from: 1200,
                to: 1170,
                direction: Direction::Down
            }
        );
        assert_eq!(controller.rating(), 1170);
        assert!(controller.window().is_empty());
        assert_eq!(controller.phase(), ControllerPhase::Accumulating);
    }

    #[test]
    fn test_consecutive_wins_raise_one_delta() {
        let mut controller = controller();
        record_all(&mut controller, &[Win, Win, Win]);
        assert_eq!(controller.rating(), 1230);
    }

    #[test]
    fn test_rating_never_below_min() {
        let settings = AdaptiveSettings {
            base_rating: 815,
            ..AdaptiveSettings::default()
        };
        let mut controller = AdaptiveController::new(settings).unwrap();
        for _ in 0..30 {
            controller.record_outcome(Loss);
            assert!(controller.rating() >= settings.min_rating);
        }
        assert_eq!(controller.rating(), 800);
    }

    #[test]
    fn test_rating_never_above_max() {
        let settings = AdaptiveSettings {
            base_rating: 2790,
            ..AdaptiveSettings::default()
        };
        let mut controller = AdaptiveController::new(settings).unwrap();
        for _ in 0..30 {
            controller.record_outcome(Win);
        }
        assert_eq!(controller.rating(), 2800);
    }

    #[test]
    fn test_mixed_window_is_suppressed() {
        let mut controller = controller();
        let updates = record_all(&mut controller, &[Win, Loss, Win]);
        assert!(matches!(
            updates[2],
            RatingUpdate::Suppressed {
                direction: Direction::Up,
                ..
            }
        ));
        assert_eq!(controller.rating(), 1200);
        assert_eq!(controller.window().len(), 3);
    }

    #[test]
    fn test_draw_heavy_window_holds() {
        let mut controller = controller();
        let updates = record_all(&mut controller, &[Draw, Loss, Draw]);
        assert!(matches!(updates[2], RatingUpdate::Held { .. }));
        assert_eq!(controller.rating(), 1200);
    }

    #[test]
    fn test_draws_do_not_block_a_clear_signal() {
        let mut controller = controller();
        let updates = record_all(&mut controller, &[Win, Draw, Win]);
        assert!(updates[2].is_adjusted());
        assert_eq!(controller.rating(), 1230);
    }

    #[test]
    fn test_no_crossing_keeps_accumulating() {
        let settings = AdaptiveSettings {
            min_games_for_adjustment: 4,
            ..AdaptiveSettings::default()
        };
        let mut controller = AdaptiveController::new(settings).unwrap();
        let updates = record_all(&mut controller, &[Win, Loss, Draw, Win]);
        assert_eq!(updates[3], RatingUpdate::Accumulating { games: 4 });
    }

    #[test]
    fn test_reset_session_keeps_rating() {
        let mut controller = controller();
        record_all(&mut controller, &[Loss, Loss, Loss, Win]);
        controller.reset_session();
        assert_eq!(controller.phase(), ControllerPhase::Idle);
        assert!(controller.window().is_empty());
        assert_eq!(controller.rating(), 1170);
    }

    #[test]
    fn test_from_state_clamps_and_resizes() {
        let mut state = controller().into_state();
        state.current_rating = 5000;
        state.phase = ControllerPhase::Adjusting;
        for outcome in [Win, Loss, Win, Loss, Win] {
            state.window.push(outcome);
        }
        state.settings.window_capacity = 3;

        let controller = AdaptiveController::from_state(state).unwrap();
        assert_eq!(controller.rating(), 2800);
        assert_eq!(controller.phase(), ControllerPhase::Accumulating);
        assert_eq!(controller.window().iter().collect::<Vec<_>>(), [Win, Loss, Win]);
    }

    #[test]
    fn test_from_state_rejects_invalid_settings() {
        let mut state = controller().into_state();
        state.settings.min_games_for_adjustment = 0;
        assert_eq!(
            AdaptiveController::from_state(state),
            Err(SettingsError::ZeroMinGames)
        );
    }

    #[test]
    fn test_state_round_trips_through_json() {
        let mut controller = controller();
        record_all(&mut controller, &[Win, Draw]);
        let json = serde_json::to_string(controller.state()).unwrap();
        let state: AdaptiveState = serde_json::from_str(&json).unwrap();
        assert_eq!(&state, controller.state());
    }

    #[test]
    fn test_update_serialization_shape() {
        let update = RatingUpdate::Adjusted {
            from: 1200,
            to: 1170,
            direction: Direction::Down,
        };
        let value = serde_json::to_value(update).unwrap();
        assert_eq!(value["event"], "adjusted");
        assert_eq!(value["direction"], "down");
    }
}
