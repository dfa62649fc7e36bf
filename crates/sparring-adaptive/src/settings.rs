use serde::{Deserialize, Serialize};
use sparring_core::{Rating, RatingRange};

/// Structurally invalid adaptive settings.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum SettingsError {
    #[display("minimum rating {min} is greater than maximum rating {max}")]
    InvertedRange { min: Rating, max: Rating },
    #[display("{name} must lie in [0, 1], got {value}")]
    ThresholdOutOfRange { name: &'static str, value: f32 },
    #[display("outcome window capacity must be at least 1")]
    EmptyWindow,
    #[display("minimum games for adjustment must be at least 1")]
    ZeroMinGames,
    #[display("minimum games for adjustment ({min_games}) exceeds window capacity ({capacity})")]
    MinGamesExceedWindow { min_games: usize, capacity: usize },
}

/// Tunable parameters of the adaptive rating controller.
///
/// Missing fields fall back to [`AdaptiveSettings::default`] when deserialized, so a
/// settings document only needs to list what it overrides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdaptiveSettings {
    /// Rating a fresh session starts from.
    pub base_rating: Rating,
    /// Fraction of 100 rating points moved per adjustment.
    pub adjustment_rate: f32,
    pub min_rating: Rating,
    pub max_rating: Rating,
    /// Win ratio at or above which the rating moves up.
    pub win_threshold: f32,
    /// Draw ratio at or above which the rating holds.
    pub draw_threshold: f32,
    /// Loss ratio at or above which the rating moves down.
    pub loss_threshold: f32,
    /// Minimum share of the window that must not oppose the adjustment direction.
    pub consistency_threshold: f32,
    pub min_games_for_adjustment: usize,
    pub window_capacity: usize,
}

impl Default for AdaptiveSettings {
    fn default() -> Self {
        Self {
            base_rating: 1200,
            adjustment_rate: 0.3,
            min_rating: 800,
            max_rating: 2800,
            win_threshold: 0.6,
            draw_threshold: 0.5,
            loss_threshold: 0.6,
            consistency_threshold: 0.7,
            min_games_for_adjustment: 3,
            window_capacity: 10,
        }
    }
}

impl AdaptiveSettings {
    pub const MIN_ADJUSTMENT_RATE: f32 = 0.05;
    pub const MAX_ADJUSTMENT_RATE: f32 = 1.0;

    /// Checks the structural constraints the controller relies on.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.min_rating > self.max_rating {
            return Err(SettingsError::InvertedRange {
                min: self.min_rating,
                max: self.max_rating,
            });
        }
        for (name, value) in [
            ("win_threshold", self.win_threshold),
            ("draw_threshold", self.draw_threshold),
            ("loss_threshold", self.loss_threshold),
            ("consistency_threshold", self.consistency_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(SettingsError::ThresholdOutOfRange { name, value });
            }
        }
        if self.window_capacity == 0 {
            return Err(SettingsError::EmptyWindow);
        }
        if self.min_games_for_adjustment == 0 {
            return Err(SettingsError::ZeroMinGames);
        }
        if self.min_games_for_adjustment > self.window_capacity {
            return Err(SettingsError::MinGamesExceedWindow {
                min_games: self.min_games_for_adjustment,
                capacity: self.window_capacity,
            });
        }
        Ok(())
    }

    /// Bounds every rating is kept within.
    #[must_use]
    pub const fn rating_range(&self) -> RatingRange {
        RatingRange::new(self.min_rating, self.max_rating)
    }

    /// Rating points moved by a single adjustment.
    ///
    /// ```
    /// use sparring_adaptive::AdaptiveSettings;
    ///
    /// assert_eq!(AdaptiveSettings::default().delta(), 30);
    /// ```
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub fn delta(&self) -> Rating {
        let rate = if self.adjustment_rate.is_nan() {
            Self::MIN_ADJUSTMENT_RATE
        } else {
            self.adjustment_rate
                .clamp(Self::MIN_ADJUSTMENT_RATE, Self::MAX_ADJUSTMENT_RATE)
        };
        (rate * 100.0).round() as Rating
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let settings = AdaptiveSettings::default();
        assert_eq!(settings.validate(), Ok(()));
        assert_eq!(settings.rating_range(), RatingRange::TUNABLE);
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        let settings = AdaptiveSettings {
            min_rating: 2000,
            max_rating: 1000,
            ..AdaptiveSettings::default()
        };
        assert_eq!(
            settings.validate(),
            Err(SettingsError::InvertedRange {
                min: 2000,
                max: 1000
            })
        );
    }

    #[test]
    fn test_validate_rejects_thresholds() {
        let settings = AdaptiveSettings {
            draw_threshold: 1.5,
            ..AdaptiveSettings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::ThresholdOutOfRange {
                name: "draw_threshold",
                ..
            })
        ));

        let settings = AdaptiveSettings {
            consistency_threshold: f32::NAN,
            ..AdaptiveSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_window_shapes() {
        let zero_window = AdaptiveSettings {
            window_capacity: 0,
            ..AdaptiveSettings::default()
        };
        assert_eq!(zero_window.validate(), Err(SettingsError::EmptyWindow));

        let zero_games = AdaptiveSettings {
            min_games_for_adjustment: 0,
            ..AdaptiveSettings::default()
        };
        assert_eq!(zero_games.validate(), Err(SettingsError::ZeroMinGames));

        let too_many = AdaptiveSettings {
            min_games_for_adjustment: 12,
            ..AdaptiveSettings::default()
        };
        assert_eq!(
            too_many.validate(),
            Err(SettingsError::MinGamesExceedWindow {
                min_games: 12,
                capacity: 10
            })
        );
    }

    #[test]
    fn test_delta_clamps_rate() {
        let delta = |adjustment_rate| {
            AdaptiveSettings {
                adjustment_rate,
                ..AdaptiveSettings::default()
            }
            .delta()
        };
        assert_eq!(delta(0.0), 5);
        assert_eq!(delta(0.5), 50);
        assert_eq!(delta(3.0), 100);
        assert_eq!(delta(f32::NAN), 5);
    }

    #[test]
    fn test_partial_document_uses_defaults() {
        let settings: AdaptiveSettings =
            serde_json::from_str(r#"{"base_rating": 1500, "min_games_for_adjustment": 5}"#)
                .unwrap();
        assert_eq!(settings.base_rating, 1500);
        assert_eq!(settings.min_games_for_adjustment, 5);
        assert_eq!(settings.window_capacity, 10);
    }
}
